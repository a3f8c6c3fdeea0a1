//! Content lookup strategies
//!
//! `DirectFile` reads from disk on every request, `MemCached` answers from the cache
//! preloaded at startup. Both report only "content" or "not found".

use crate::content::ContentCache;
use crate::logger;
use hyper::body::Bytes;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Cache-Control value sent in `mem` mode
pub const MEM_CACHE_CONTROL: &str = "max-age=1600";

#[derive(Debug, Clone)]
pub enum ContentSource {
    DirectFile { root: PathBuf },
    MemCached { cache: Arc<ContentCache> },
}

impl ContentSource {
    pub fn direct(root: impl Into<PathBuf>) -> Self {
        Self::DirectFile { root: root.into() }
    }

    pub fn cached(cache: impl Into<Arc<ContentCache>>) -> Self {
        Self::MemCached {
            cache: cache.into(),
        }
    }

    /// Cache-Control header for successful responses, if any
    ///
    /// Disk content may change between reads, so only `mem` mode advertises a max-age.
    pub const fn cache_control(&self) -> Option<&'static str> {
        match self {
            Self::DirectFile { .. } => None,
            Self::MemCached { .. } => Some(MEM_CACHE_CONTROL),
        }
    }

    /// Resolve a normalized relative path to its content
    ///
    /// Returns `None` for every kind of failure; callers answer with 404.
    pub async fn resolve(&self, path: &str) -> Option<Bytes> {
        match self {
            Self::DirectFile { root } => read_from_disk(root, path).await,
            Self::MemCached { cache } => cache.get(path).cloned(),
        }
    }
}

async fn read_from_disk(root: &Path, path: &str) -> Option<Bytes> {
    if !is_canonical(path) {
        if path.split('/').any(|segment| segment == "..") {
            logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        }
        return None;
    }

    let file_path = root.join(path);
    match fs::read(&file_path).await {
        Ok(content) => Some(Bytes::from(content)),
        // File not found is common (404), no need to log
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            None
        }
    }
}

/// True if `path` is a plain relative path below the content root
///
/// Empty, `.` and `..` segments are refused so a file is reachable through exactly the
/// spelling that is also its cache key.
fn is_canonical(path: &str) -> bool {
    path.split('/')
        .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
