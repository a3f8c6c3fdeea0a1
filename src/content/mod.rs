//! Content resolution module
//!
//! Turns request paths into file bytes: path normalization, the startup preload walk,
//! and the two lookup strategies (direct disk reads, preloaded cache).

pub mod cache;
pub mod path;
pub mod source;

// Re-export main types
pub use cache::ContentCache;
pub use path::normalize_request_path;
pub use source::ContentSource;
