//! Response header lines collected during a transfer.

/// Headers of the final response. Redirect hops are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    pub content_disposition: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
}

impl ResponseHeaders {
    /// True for `Content-Disposition: attachment`, with or without parameters.
    pub fn is_attachment(&self) -> bool {
        self.content_disposition
            .as_deref()
            .and_then(|cd| cd.split(';').next())
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("attachment"))
    }

    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("text/html"))
    }
}

pub(crate) fn parse_response_headers(lines: &[String]) -> ResponseHeaders {
    let mut headers = ResponseHeaders::default();
    for line in lines {
        let line = line.trim();
        // Each status line starts a new response when redirects are followed.
        if line.starts_with("HTTP/") {
            headers = ResponseHeaders::default();
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "content-disposition" => headers.content_disposition = Some(value.to_string()),
            "content-type" => headers.content_type = Some(value.to_string()),
            "content-length" => headers.content_length = value.parse().ok(),
            _ => {}
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn attachment_headers() {
        let h = parse_response_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: application/pdf",
            "Content-Disposition: attachment; filename=\"Fest.pdf\"",
            "Content-Length: 2048",
            "",
        ]));
        assert_eq!(h.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(
            h.content_disposition.as_deref(),
            Some("attachment; filename=\"Fest.pdf\"")
        );
        assert_eq!(h.content_length, Some(2048));
        assert!(h.is_attachment());
        assert!(!h.is_html());
    }

    #[test]
    fn redirect_hops_are_discarded() {
        let h = parse_response_headers(&lines(&[
            "HTTP/1.1 302 Found",
            "Location: /login/?next=/fest/export/excel",
            "Content-Disposition: attachment; filename=\"stale.bin\"",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: text/html; charset=utf-8",
            "",
        ]));
        assert!(h.content_disposition.is_none());
        assert_eq!(h.content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(h.is_html());
        assert!(!h.is_attachment());
    }

    #[test]
    fn inline_is_not_attachment() {
        let h = parse_response_headers(&lines(&["Content-Disposition: inline; filename=\"a.pdf\""]));
        assert!(!h.is_attachment());
        let h = parse_response_headers(&lines(&["Content-Disposition: Attachment"]));
        assert!(h.is_attachment());
    }

    #[test]
    fn bad_length_ignored() {
        let h = parse_response_headers(&lines(&["content-length: lots"]));
        assert_eq!(h.content_length, None);
    }
}
