// Command line module
// Startup arguments; these take precedence over the config file and environment

use clap::Parser;
use std::path::PathBuf;

use super::types::{Config, ServingMode};

/// Default configuration file name (extension resolved by the config crate)
pub const DEFAULT_CONFIG_FILE: &str = "memserve";

#[derive(Debug, Clone, Parser)]
#[command(name = "memserve", version, about = "Serve a directory over HTTP from disk or from memory")]
pub struct Cli {
    /// Serving mode: `file` reads from disk per request, `mem` preloads everything.
    /// Falls back to `content.mode` from the config file or environment
    #[arg(value_enum)]
    pub mode: Option<ServingMode>,

    /// Content root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Tokio worker threads (defaults to CPU cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Configuration file path, without extension
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
}

impl Cli {
    /// Overlay command line values onto a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.content.mode = mode;
        }
        if let Some(root) = &self.root {
            config.content.root.clone_from(root);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if self.workers.is_some() {
            config.server.workers = self.workers;
        }
    }
}
