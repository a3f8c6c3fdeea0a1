//! MIME type detection module
//!
//! Returns the Content-Type for a file name based on its extension.

/// Extension of the final path segment: the text after its last `.`.
///
/// `"a.b/c"` has no extension, `"foo."` has an empty one.
pub fn extension(name: &str) -> Option<&str> {
    let segment = name.rsplit('/').next().unwrap_or(name);
    segment.rfind('.').map(|i| &segment[i + 1..])
}

/// Get MIME Content-Type for a file name
///
/// The match is case-sensitive; anything not listed is served as `text/plain`.
///
/// # Examples
/// ```
/// use memserve::http::mime::get_content_type;
/// assert_eq!(get_content_type("index.html"), "text/html");
/// assert_eq!(get_content_type("img/logo.png"), "image/png");
/// assert_eq!(get_content_type("README"), "text/plain");
/// ```
pub fn get_content_type(name: &str) -> &'static str {
    match extension(name) {
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("html") => "text/html",
        Some("jpg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("ico") => "image/x-icon",

        // Default
        _ => "text/plain",
    }
}
