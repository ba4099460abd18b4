//! `Content-Disposition` filename extraction (`filename` and RFC 5987 `filename*`).

/// Filename announced by a `Content-Disposition` header value.
///
/// `filename*=UTF-8''...` takes precedence over `filename=`.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in split_params(header_value).into_iter().skip(1) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let encoded = value
                    .split_once("''")
                    .filter(|(charset, _)| charset.eq_ignore_ascii_case("utf-8"))
                    .map(|(_, rest)| rest);
                if let Some(encoded) = encoded {
                    extended = Some(percent_decode_lossy(encoded));
                }
            }
            "filename" => plain = Some(unquote(value)),
            _ => {}
        }
    }

    extended.or(plain).filter(|name| !name.is_empty())
}

/// Splits on `;` outside quoted-strings; `\` escapes the next character inside quotes.
fn split_params(header_value: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in header_value.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(&header_value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    params.push(&header_value[start..]);
    params
}

/// Strips surrounding quotes and backslash escapes from a quoted-string.
fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    else {
        return value.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            _ => out.push(c),
        }
    }
    out
}

/// Decodes `%XX` escapes; malformed escapes are kept verbatim.
pub(super) fn percent_decode_lossy(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| input.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(b) => {
                out.push(b);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
