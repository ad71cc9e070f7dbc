/// Scanner module: folder size scanning.
///
/// Provides two modes:
/// - **Shallow:** one-level listing for fast browsing. Each subdirectory is
///   peeked one level deep for child counts and an approximate size.
/// - **Recursive:** full depth-first traversal with exact visible/hidden
///   totals.
///
/// [`scan_folder`] runs on the calling thread. [`start_scan`] and
/// [`start_duplicate_scan`] run the same work on a dedicated worker thread
/// so an interactive caller never blocks on a large tree.
pub mod folder;
pub mod worker;

use crate::error::Result;
use crate::model::ScanResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use worker::{start_duplicate_scan, start_scan, ScanHandle, ScanOutcome};

/// Options for [`scan_folder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Walk the whole tree for exact totals instead of a one-level listing.
    pub recursive: bool,
}

impl ScanOptions {
    pub fn shallow() -> Self {
        Self { recursive: false }
    }

    pub fn recursive() -> Self {
        Self { recursive: true }
    }
}

/// Scan the folder at `root`.
///
/// Fails with [`ScanError::RootNotFound`](crate::ScanError::RootNotFound) or
/// [`ScanError::RootUnreadable`](crate::ScanError::RootUnreadable) only when
/// `root` itself cannot be listed. Entries below the root that cannot be
/// read are left out of the result.
pub fn scan_folder(root: &Path, options: &ScanOptions) -> Result<ScanResult> {
    folder::scan_root(root, options.recursive)
}
