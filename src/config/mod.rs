// Configuration module entry point
// Layers defaults, config file, environment and command line into one immutable Config

mod cli;
mod state;
mod types;

use std::net::SocketAddr;

use crate::error::{Result, ServerError};

// Re-export public types
pub use cli::{Cli, DEFAULT_CONFIG_FILE};
pub use state::AppState;
pub use types::{
    Config, ContentConfig, LoggingConfig, PerformanceConfig, ServerConfig, ServingMode,
};

/// Environment variable prefix, e.g. `MEMSERVE_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "MEMSERVE";

impl Config {
    /// Load configuration and apply command line overrides
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Self::load_from(&cli.config)?;
        cli.apply(&mut config);
        Ok(config)
    }

    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("content.mode", "file")?
            .set_default("content.root", "./web")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}
