//! A navigator that downloads the export instead of showing it in a browser.
//!
//! Uses the curl crate (libcurl). The response body is buffered and only
//! written once the server has answered with a 2xx attachment, so a failed
//! or redirected export never leaves a file behind.

mod headers;

pub use headers::ResponseHeaders;

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str;
use url::Url;

use crate::config::HttpConfig;
use crate::url_builder::Navigator;
use crate::url_model::derive_filename;

/// Give up looking for a free `name (n).ext` after this many tries.
const MAX_COLLISION_SUFFIX: u32 = 999;

pub struct DownloadNavigator {
    output_dir: PathBuf,
    http: HttpConfig,
    saved: Vec<PathBuf>,
}

impl DownloadNavigator {
    pub fn new(output_dir: impl Into<PathBuf>, http: &HttpConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            http: http.clone(),
            saved: Vec::new(),
        }
    }

    /// Files written so far, in download order.
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    fn fetch(&self, url: &Url) -> Result<(ResponseHeaders, Vec<u8>)> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).context("invalid URL")?;
        easy.get(true)?;
        easy.follow_location(self.http.follow_redirects)?;
        easy.connect_timeout(self.http.connect_timeout())?;
        easy.timeout(self.http.timeout())?;
        if let Some(cookie) = &self.http.session_cookie {
            easy.cookie(cookie)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("export request failed")?;
        }

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("GET {} returned HTTP {}", url, code);
        }

        Ok((headers::parse_response_headers(&header_lines), body))
    }
}

/// An export is always served as an attachment. Anything else is typically
/// the login page reached through a redirect.
fn ensure_attachment(url: &Url, headers: &ResponseHeaders) -> Result<()> {
    if headers.is_html() || !headers.is_attachment() {
        tracing::warn!(
            %url,
            content_type = headers.content_type.as_deref().unwrap_or("unknown"),
            content_disposition = headers.content_disposition.as_deref().unwrap_or("none"),
            "response is not an export attachment"
        );
        anyhow::bail!(
            "GET {} did not return an export (content type {}); check http.session_cookie",
            url,
            headers.content_type.as_deref().unwrap_or("unknown")
        );
    }
    Ok(())
}

/// Creates `dir/filename`, or `dir/stem (n).ext` when that name is taken.
fn create_unique(dir: &Path, filename: &str) -> Result<(PathBuf, File)> {
    let plain = Path::new(filename);
    let stem = plain
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let ext = plain.extension().and_then(|e| e.to_str());

    for n in 0..=MAX_COLLISION_SUFFIX {
        let name = match (n, ext) {
            (0, _) => filename.to_string(),
            (n, Some(ext)) => format!("{stem} ({n}).{ext}"),
            (n, None) => format!("{stem} ({n})"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e).with_context(|| format!("create {}", path.display())),
        }
    }
    anyhow::bail!("no free file name for {} in {}", filename, dir.display())
}

/// Writes `body` into `dir` under the name derived from the response.
fn save_export(
    dir: &Path,
    url: &Url,
    headers: &ResponseHeaders,
    body: &[u8],
) -> Result<PathBuf> {
    let filename = derive_filename(url, headers.content_disposition.as_deref());
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let (path, mut file) = create_unique(dir, &filename)?;
    file.write_all(body)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

impl Navigator for DownloadNavigator {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        let (headers, body) = self.fetch(url)?;
        ensure_attachment(url, &headers)?;
        if let Some(expected) = headers.content_length {
            if expected != body.len() as u64 {
                tracing::warn!(expected, received = body.len(), "export size mismatch");
            }
        }
        let path = save_export(&self.output_dir, url, &headers, &body)?;
        tracing::info!(
            path = %path.display(),
            bytes = body.len(),
            content_type = headers.content_type.as_deref().unwrap_or("unknown"),
            "saved export"
        );
        self.saved.push(path);
        Ok(())
    }
}
