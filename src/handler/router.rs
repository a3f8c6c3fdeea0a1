//! Request dispatch module
//!
//! Entry point for HTTP request processing: path normalization, content lookup, response
//! headers and access logging. The method is not checked; every request is treated as GET.

use crate::config::AppState;
use crate::content::path::{decode_request_path, normalize_request_path};
use crate::content::ContentSource;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let name = normalize_request_path(&decode_request_path(req.uri().path()));
    let response = serve_content(&state.source, &name).await;

    if state.config.logging.access_log {
        let entry = access_entry(&req, &response, remote_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Look up a normalized path and build the response for it
///
/// The Content-Type comes from the normalized name, so `/styles` resolving to
/// `styles.html` is served as HTML.
pub async fn serve_content(source: &ContentSource, name: &str) -> Response<Full<Bytes>> {
    match source.resolve(name).await {
        Some(data) => http::build_content_response(
            data,
            http::get_content_type(name),
            source.cache_control(),
        ),
        None => http::build_404_response(),
    }
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    remote_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
