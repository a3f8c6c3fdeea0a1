//! Request handler module
//!
//! Turns an HTTP request into a content lookup and the matching response.

pub mod router;

// Re-export main entry point
pub use router::{handle_request, serve_content};
