//! HTTP protocol layer module
//!
//! Content-type inference and response builders, decoupled from content lookup.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use mime::get_content_type;
pub use response::{build_404_response, build_content_response};
