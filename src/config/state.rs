// Application state module
// Immutable state shared by every connection task

use super::types::{Config, ServingMode};
use crate::content::{ContentCache, ContentSource};
use crate::error::Result;
use crate::logger;

/// Application state
///
/// Built once before the listener starts and never mutated, so it is shared behind a
/// plain `Arc` without locks.
pub struct AppState {
    pub config: Config,
    pub source: ContentSource,
}

impl AppState {
    pub const fn new(config: Config, source: ContentSource) -> Self {
        Self { config, source }
    }

    /// Build state from configuration, preloading the cache in `mem` mode
    ///
    /// A preload failure is returned rather than serving a partial cache.
    pub fn from_config(config: Config) -> Result<Self> {
        let source = match config.content.mode {
            ServingMode::DirectFile => ContentSource::direct(&config.content.root),
            ServingMode::MemCached => {
                let cache = ContentCache::load(&config.content.root)?;
                logger::log_cache_loaded(&config.content.root, cache.len(), cache.total_bytes());
                ContentSource::cached(cache)
            }
        };

        Ok(Self::new(config, source))
    }
}
