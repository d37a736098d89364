//! # Cache Module
//!
//! File-backed quota cache shared by successive statusline invocations. The
//! host re-runs this program on every UI refresh, so the cache is what keeps
//! those refreshes off the network. Concurrent invocations race on the file
//! with last-write-wins semantics; a lost or corrupted write is tolerated and
//! simply reads as a future miss.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::models::QuotaCacheEntry;

/// Snapshots older than this are stale: still usable as a fallback, but a
/// live fetch is attempted first.
pub const CACHE_TTL_MS: i64 = 30_000;

static CLAUDE_DIR: Lazy<Option<PathBuf>> =
    Lazy::new(|| directories::BaseDirs::new().map(|b| b.home_dir().join(".claude")));

/// Per-user Claude config directory (`~/.claude`), if a home dir resolves.
pub fn claude_dir() -> Option<&'static Path> {
    CLAUDE_DIR.as_deref()
}

/// Repository for the persisted [`QuotaCacheEntry`]. Holds the target path
/// explicitly so tests and the fetcher never touch ambient globals.
#[derive(Debug, Clone)]
pub struct QuotaCache {
    path: PathBuf,
}

impl QuotaCache {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The fixed per-user location: `~/.claude/hooks/quota-cache.json`.
    pub fn default_location() -> Option<Self> {
        claude_dir().map(|d| Self::at(d.join("hooks").join("quota-cache.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file and unparseable contents both read as "no cached value".
    pub fn read(&self) -> Option<QuotaCacheEntry> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Full-file overwrite. Callers treat failure as best-effort; the write
    /// is skipped silently when the cache dir cannot be created.
    pub fn write(&self, entry: &QuotaCacheEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create cache dir {}", parent.display()))?;
        }
        let json = serde_json::to_string(entry)?;
        fs::write(&self.path, json)
            .with_context(|| format!("write quota cache {}", self.path.display()))
    }
}
