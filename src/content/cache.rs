//! Preloaded content cache
//!
//! Built once at startup by walking the content root; read-only afterwards and shared
//! between connection tasks behind an `Arc`.

use crate::error::{Result, ServerError};
use hyper::body::Bytes;
use std::collections::HashMap;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Mapping of root-relative file path to file content
///
/// Keys use `/` separators and never start with a slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCache {
    entries: HashMap<String, Bytes>,
}

impl ContentCache {
    /// Walk `root` recursively and read every regular file into memory
    ///
    /// Any error while listing or reading aborts the load, as does a file name that is
    /// not valid UTF-8. Symbolic links are followed; a link loop is reported by the
    /// walker as an error.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        let metadata = std::fs::metadata(root).map_err(|source| ServerError::Read {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ServerError::NotADirectory(root.to_path_buf()));
        }

        let mut entries = HashMap::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|source| ServerError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let content = std::fs::read(path).map_err(|source| ServerError::Read {
                path: path.to_path_buf(),
                source,
            })?;

            entries.insert(cache_key(root, path)?, Bytes::from(content));
        }

        Ok(Self { entries })
    }

    /// Look up content by normalized relative path
    pub fn get(&self, path: &str) -> Option<&Bytes> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all cached content sizes
    pub fn total_bytes(&self) -> usize {
        self.entries.values().map(Bytes::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ContentCache
where
    K: Into<String>,
    V: Into<Bytes>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Root-relative key for `path`, joined with `/` whatever the host separator is
///
/// Names that are not UTF-8 are an error: no request path could match them.
fn cache_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ServerError::NonUtf8Path(path.to_path_buf()))?;

    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "A").unwrap();
        fs::write(dir.path().join("styles.css"), "B").unwrap();
        fs::create_dir_all(dir.path().join("img/icons")).unwrap();
        fs::write(dir.path().join("img/logo.png"), [1u8, 2, 3]).unwrap();
        fs::write(dir.path().join("img/icons/star.svg"), "<svg/>").unwrap();
        dir
    }

    #[test]
    fn test_load_recursive() {
        let dir = fixture();
        let cache = ContentCache::load(dir.path()).unwrap();

        assert_eq!(cache.len(), 4);
        assert_eq!(cache.get("index.html").unwrap().as_ref(), b"A");
        assert_eq!(cache.get("styles.css").unwrap().as_ref(), b"B");
        assert_eq!(cache.get("img/logo.png").unwrap().as_ref(), &[1, 2, 3]);
        assert_eq!(cache.get("img/icons/star.svg").unwrap().as_ref(), b"<svg/>");
        assert_eq!(cache.total_bytes(), 1 + 1 + 3 + 6);
    }

    #[test]
    fn test_keys_are_relative_with_forward_slashes() {
        let dir = fixture();
        let cache = ContentCache::load(dir.path()).unwrap();

        for key in cache.keys() {
            assert!(!key.starts_with('/'), "leading slash in {key}");
            assert!(!key.contains('\\'), "backslash in {key}");
        }
        assert!(!cache.contains("img"));
        assert!(!cache.contains("/index.html"));
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = fixture();
        let first = ContentCache::load(dir.path()).unwrap();
        let second = ContentCache::load(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let cache = ContentCache::load(dir.path()).unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.total_bytes(), 0);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = ContentCache::load(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ServerError::Read { .. }));
    }

    #[test]
    fn test_file_root_is_rejected() {
        let dir = fixture();
        let err = ContentCache::load(dir.path().join("index.html")).unwrap_err();
        assert!(matches!(err, ServerError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = fixture();
        let secret = dir.path().join("secret.txt");
        fs::write(&secret, "x").unwrap();
        fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits, nothing to assert there
        if fs::read(&secret).is_ok() {
            return;
        }

        let err = ContentCache::load(dir.path()).unwrap_err();
        assert!(matches!(err, ServerError::Read { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_fatal() {
        let dir = fixture();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("img/loop")).unwrap();

        let err = ContentCache::load(dir.path()).unwrap_err();
        assert!(matches!(err, ServerError::Walk { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_fatal() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = fixture();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.html")), "x").unwrap();

        let err = ContentCache::load(dir.path()).unwrap_err();
        assert!(matches!(err, ServerError::NonUtf8Path(_)));
    }

    #[test]
    fn test_from_iter() {
        let cache: ContentCache = [("a.html", &b"x"[..]), ("b/c.css", &b"yz"[..])]
            .into_iter()
            .collect();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("b/c.css").unwrap().as_ref(), b"yz");
    }
}
