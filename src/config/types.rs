// Configuration types module
// Defines all configuration-related data structures

use crate::error::ServerError;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// How content is retrieved for each request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum ServingMode {
    /// Read the file from disk on every request
    #[value(name = "file")]
    DirectFile,
    /// Preload the whole content root into memory at startup
    #[value(name = "mem")]
    MemCached,
}

impl ServingMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectFile => "file",
            Self::MemCached => "mem",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::DirectFile => "Direct file serving mode",
            Self::MemCached => "Memory cached file serving mode",
        }
    }
}

impl fmt::Display for ServingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServingMode {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::DirectFile),
            "mem" => Ok(Self::MemCached),
            other => Err(ServerError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for ServingMode {
    type Error = ServerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Content configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    pub mode: ServingMode,
    pub root: PathBuf,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound on a connection's lifetime, in seconds
    pub connection_timeout: u64,
    pub max_connections: Option<u64>,
}
