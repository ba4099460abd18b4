//! Filesystem-safe file names.

/// Longest file name most Linux filesystems accept, in bytes.
const NAME_MAX: usize = 255;

/// Replaces separators, control characters and whitespace with `_`,
/// collapses runs of `_`, trims dots/underscores at both ends and caps
/// the length at `NAME_MAX` bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
