//! On-disk artifact cache keyed by game identifier
//!
//! Favicons and background images are fetched once and kept forever; a cache
//! hit never re-validates or touches the network. Stale artwork is only
//! refreshed by deleting the file externally.

use crate::error::EnrichError;
use std::fs;
use std::path::{Path, PathBuf};

/// The two artifact kinds the cache knows about. Extensions are fixed
/// regardless of what the remote actually served, for compatibility with
/// existing cache contents.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArtifactKind {
    Favicon,
    Background,
}

impl ArtifactKind {
    pub fn file_name(&self, identifier: &str) -> String {
        match self {
            ArtifactKind::Favicon => format!("{identifier}.png"),
            ArtifactKind::Background => format!("{identifier}_bg.jpg"),
        }
    }
}

/// Return the cached artifact path for (identifier, kind), fetching and
/// writing it first on a miss.
///
/// On a hit `fetch` is never invoked. On a miss the cache directory is
/// created if absent, `fetch` is called once, and a zero-byte body counts as
/// a fetch failure so no file is written. Writes are plain write-then-return;
/// crash atomicity is not promised.
pub fn get_or_fetch<F>(
    dir: &Path,
    identifier: &str,
    kind: ArtifactKind,
    fetch: F,
) -> Result<PathBuf, EnrichError>
where
    F: FnOnce() -> Result<Vec<u8>, EnrichError>,
{
    let path = dir.join(kind.file_name(identifier));

    if path.exists() {
        return Ok(path);
    }

    fs::create_dir_all(dir).map_err(|e| EnrichError::CacheWrite {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let bytes = fetch()?;
    if bytes.is_empty() {
        return Err(EnrichError::Fetch("empty response body".to_string()));
    }

    fs::write(&path, &bytes).map_err(|e| EnrichError::CacheWrite {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "5784da12ef769fbd649bd990e9e45b90e6b90c59df8e7740b9945cf33f7a2169";

    // ── file naming ─────────────────────────────────────────────

    #[test]
    fn favicon_file_name() {
        assert_eq!(ArtifactKind::Favicon.file_name("abc"), "abc.png");
    }

    #[test]
    fn background_file_name() {
        assert_eq!(ArtifactKind::Background.file_name("abc"), "abc_bg.jpg");
    }

    // ── get_or_fetch ────────────────────────────────────────────

    #[test]
    fn miss_fetches_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = get_or_fetch(dir.path(), ID, ArtifactKind::Favicon, || {
            Ok(b"icon-bytes".to_vec())
        })
        .unwrap();
        assert_eq!(path, dir.path().join(format!("{ID}.png")));
        assert_eq!(fs::read(&path).unwrap(), b"icon-bytes");
    }

    #[test]
    fn hit_never_invokes_fetch() {
        let dir = tempfile::tempdir().unwrap();
        get_or_fetch(dir.path(), ID, ArtifactKind::Favicon, || {
            Ok(b"original".to_vec())
        })
        .unwrap();

        // A second fetch that would fail outright must not even run.
        let path = get_or_fetch(dir.path(), ID, ArtifactKind::Favicon, || {
            panic!("fetch invoked on cache hit")
        })
        .unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"original");
    }

    #[test]
    fn hit_ignores_different_bytes() {
        let dir = tempfile::tempdir().unwrap();
        get_or_fetch(dir.path(), ID, ArtifactKind::Background, || {
            Ok(b"first".to_vec())
        })
        .unwrap();
        let path = get_or_fetch(dir.path(), ID, ArtifactKind::Background, || {
            Ok(b"second".to_vec())
        })
        .unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn empty_body_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = get_or_fetch(dir.path(), ID, ArtifactKind::Background, || Ok(Vec::new()));
        assert!(matches!(result, Err(EnrichError::Fetch(_))));
        assert!(!dir.path().join(format!("{ID}_bg.jpg")).exists());
    }

    #[test]
    fn fetch_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = get_or_fetch(dir.path(), ID, ArtifactKind::Favicon, || {
            Err(EnrichError::Fetch("HTTP 404".to_string()))
        });
        assert!(result.is_err());
        assert!(!dir.path().join(format!("{ID}.png")).exists());
    }

    #[test]
    fn creates_missing_cache_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Browser/Icons");
        let path = get_or_fetch(&nested, ID, ArtifactKind::Favicon, || {
            Ok(b"icon".to_vec())
        })
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn kinds_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let a = get_or_fetch(dir.path(), ID, ArtifactKind::Favicon, || {
            Ok(b"icon".to_vec())
        })
        .unwrap();
        let b = get_or_fetch(dir.path(), ID, ArtifactKind::Background, || {
            Ok(b"background".to_vec())
        })
        .unwrap();
        assert_ne!(a, b);
    }
}
