//! Startup error types
//!
//! Only startup can fail. Per-request failures are turned into 404 responses by the
//! handler and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid serving mode '{0}': expected 'file' or 'mem'")]
    InvalidMode(String),

    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("content root '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("file name is not valid UTF-8: '{}'", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("failed to walk content directory '{}': {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read '{}' into cache: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file: {0}")]
    Logger(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
