//! memserve - static content server with direct-file and preloaded in-memory modes
//!
//! The binary in `main.rs` wires these modules together; they are exposed as a library so
//! the handler can be driven from tests and benchmarks without a listening socket.

pub mod config;
pub mod content;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use error::{Result, ServerError};
