//! File names for downloaded exports.
//!
//! The server names the file in `Content-Disposition`; when it does not, the
//! last segment of the export URL is used. Either way the name is sanitized
//! before it touches the filesystem.

mod content_disposition;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use sanitize::sanitize_filename;

use url::Url;

/// Used when neither the header nor the URL yield a usable name.
pub const FALLBACK_FILENAME: &str = "export.bin";

/// Last non-empty path segment of `url`, percent-decoded.
pub fn filename_from_url_path(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let decoded = content_disposition::percent_decode_lossy(segment);
    match decoded.as_str() {
        "." | ".." => None,
        _ => Some(decoded),
    }
}

pub fn derive_filename(url: &Url, content_disposition: Option<&str>) -> String {
    content_disposition
        .and_then(parse_content_disposition_filename)
        .or_else(|| filename_from_url_path(url))
        .map(|raw| sanitize_filename(&raw))
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}
