//! Builds the export URL from a path and a request, then hands it to a
//! navigator.
//!
//! The path is resolved against the page origin; the six flags are appended
//! as query parameters after any parameters the path already carries.

use anyhow::Result;
use url::Url;

use crate::error::ExportError;
use crate::request::ExportRequest;
use crate::snapshot::CheckboxSnapshot;

/// Where a finished export URL goes: a browser location, a download, stdout.
pub trait Navigator {
    fn navigate(&mut self, url: &Url) -> Result<()>;
}

impl<F> Navigator for F
where
    F: FnMut(&Url),
{
    fn navigate(&mut self, url: &Url) -> Result<()> {
        self(url);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExportUrlBuilder {
    origin: Url,
}

impl ExportUrlBuilder {
    /// Keeps only scheme, host and port of `origin`; credentials, path,
    /// query and fragment are dropped.
    pub fn new(origin: &str) -> Result<Self, ExportError> {
        let invalid = |reason: String| ExportError::InvalidOrigin {
            origin: origin.to_string(),
            reason,
        };
        let mut url = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !url.has_host() {
            return Err(invalid("origin must have a host".to_string()));
        }
        url.set_username("")
            .and_then(|()| url.set_password(None))
            .map_err(|()| invalid("cannot strip credentials".to_string()))?;
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { origin: url })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn resolve(&self, export_path: &str) -> Result<Url, ExportError> {
        self.origin
            .join(export_path)
            .map_err(|source| ExportError::InvalidPath {
                path: export_path.to_string(),
                source,
            })
    }

    pub fn build(&self, export_path: &str, request: &ExportRequest) -> Result<Url, ExportError> {
        let mut url = self.resolve(export_path)?;
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        tracing::debug!(%url, "built export url");
        Ok(url)
    }
}

/// Read the snapshot, build the export URL and navigate to it once.
///
/// Nothing is navigated to when the snapshot is incomplete or the path
/// does not resolve.
pub fn build_and_navigate<S, N>(
    builder: &ExportUrlBuilder,
    export_path: &str,
    snapshot: &S,
    navigator: &mut N,
) -> Result<Url>
where
    S: CheckboxSnapshot + ?Sized,
    N: Navigator + ?Sized,
{
    let request = ExportRequest::read(snapshot)?;
    let url = builder.build(export_path, &request)?;
    tracing::info!(%url, "navigating to export");
    navigator.navigate(&url)?;
    Ok(url)
}
