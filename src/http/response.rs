//! HTTP response building module
//!
//! Builders for the two outcomes a request can have: the file content, or 404.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Body sent with every 404
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Build 200 response carrying file content
///
/// `cache_control` is only set when the content comes from the preloaded cache.
pub fn build_content_response(
    data: Bytes,
    content_type: &str,
    cache_control: Option<&str>,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len());

    if let Some(value) = cache_control {
        builder = builder.header("Cache-Control", value);
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert!(resp.headers().get("Cache-Control").is_none());
    }

    #[test]
    fn test_content_response_without_cache_control() {
        let resp = build_content_response(Bytes::from_static(b"body"), "text/css", None);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "4");
        assert!(resp.headers().get("Cache-Control").is_none());
    }

    #[test]
    fn test_content_response_with_cache_control() {
        let resp = build_content_response(
            Bytes::from_static(&[1, 2, 3]),
            "image/png",
            Some("max-age=1600"),
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Cache-Control"], "max-age=1600");
    }
}
