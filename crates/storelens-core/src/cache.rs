/// Caller-owned cache of folder scan results.
///
/// The cache is an ordinary object: the caller creates it, passes it by
/// reference (or `Arc`) to whatever needs it, and decides when entries go
/// stale. A file watcher calls [`ScanCache::invalidate`] for the folder that
/// changed; a UI closing a view calls [`ScanCache::dispose`].
///
/// Results are keyed by root path *and* mode, because a shallow listing and
/// a recursive scan of the same folder report different totals.
use crate::error::Result;
use crate::model::ScanResult;
use crate::scanner::{scan_folder, ScanOptions};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    root: PathBuf,
    recursive: bool,
}

/// A cached result and when it was stored.
#[derive(Debug, Clone)]
pub struct CachedScan {
    pub result: ScanResult,
    pub cached_at: DateTime<Utc>,
}

/// Thread-safe map of scan results.
#[derive(Debug, Default)]
pub struct ScanCache {
    entries: RwLock<HashMap<CacheKey, CachedScan>>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `root` in the given mode, if present.
    pub fn get(&self, root: &Path, recursive: bool) -> Option<CachedScan> {
        let key = CacheKey {
            root: root.to_path_buf(),
            recursive,
        };
        self.entries.read().get(&key).cloned()
    }

    /// Store `result`, replacing any previous entry for the same root and mode.
    pub fn insert(&self, result: ScanResult, recursive: bool) {
        let key = CacheKey {
            root: result.root_path.clone(),
            recursive,
        };
        self.entries.write().insert(
            key,
            CachedScan {
                result,
                cached_at: Utc::now(),
            },
        );
    }

    /// Return the cached result, or scan and cache it.
    ///
    /// The lock is not held while scanning; two callers racing on the same
    /// folder both scan and the later insert wins.
    pub fn get_or_scan(&self, root: &Path, options: &ScanOptions) -> Result<ScanResult> {
        if let Some(hit) = self.get(root, options.recursive) {
            debug!("Cache hit for {}", root.display());
            return Ok(hit.result);
        }
        let result = scan_folder(root, options)?;
        self.insert(result.clone(), options.recursive);
        Ok(result)
    }

    /// Drop every entry that `changed` can affect: scans of `changed` itself,
    /// of anything below it, and of its ancestors (whose totals include it).
    ///
    /// Returns the number of entries removed.
    pub fn invalidate(&self, changed: &Path) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|key, _| !(changed.starts_with(&key.root) || key.root.starts_with(changed)));
        let removed = before - entries.len();
        if removed > 0 {
            debug!("Invalidated {removed} cached scans for {}", changed.display());
        }
        removed
    }

    /// Drop all entries.
    pub fn dispose(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
