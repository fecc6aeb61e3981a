//! Failure taxonomy for the enrichment pipeline
//!
//! Every fetch/parse/cache operation reports its own failure; the enrichment
//! pass logs it and degrades to an empty/absent value instead of aborting
//! other games or other artifacts of the same game.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    /// Empty URL handed to identity derivation. A config error, not a
    /// runtime condition.
    #[error("game URL is empty")]
    EmptyInput,

    /// Network-level failure: timeout, DNS, non-success status, transport
    /// error, or an empty response body.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Malformed URL or unparseable page content.
    #[error("parse failed: {0}")]
    Parse(String),

    /// Could not write a cache file (disk full, permissions).
    #[error("failed to write cache file {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
