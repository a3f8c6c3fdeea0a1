//! Request path normalization
//!
//! Maps a raw URL path onto the relative file name used for lookup:
//! - exactly one leading `/` is stripped
//! - an empty path becomes `index`
//! - a final segment without a `.` gets `.html` appended

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Document served for the root path (before the default extension is applied)
pub const DEFAULT_DOCUMENT: &str = "index";

/// Extension appended to extensionless paths
pub const DEFAULT_EXTENSION: &str = ".html";

/// Normalize a raw request path into a relative file path
///
/// Only the final segment is inspected for a `.`: `/a.b/c` becomes `a.b/c.html`
/// while `/a.b` is left as `a.b`.
///
/// # Examples
/// ```
/// use memserve::content::normalize_request_path;
/// assert_eq!(normalize_request_path("/"), "index.html");
/// assert_eq!(normalize_request_path("/styles"), "styles.html");
/// assert_eq!(normalize_request_path("/img/logo.png"), "img/logo.png");
/// ```
pub fn normalize_request_path(raw: &str) -> String {
    let trimmed = raw.strip_prefix('/').unwrap_or(raw);

    let mut name = if trimmed.is_empty() {
        DEFAULT_DOCUMENT.to_string()
    } else {
        trimmed.to_string()
    };

    let final_segment = name.rsplit('/').next().unwrap_or_default();
    if !final_segment.contains('.') {
        name.push_str(DEFAULT_EXTENSION);
    }

    name
}

/// Percent-decode a URL path
///
/// Invalid UTF-8 sequences are replaced rather than rejected; such a path simply
/// won't match any file.
pub fn decode_request_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}
