/// StoreLens Core: folder scanning, duplicate detection, and result model.
///
/// This crate contains all business logic with zero UI dependencies.
/// Every operation is call/return: results are plain, fully-materialised
/// values that can be handed across a thread or process boundary.
///
/// # Modules
///
/// - [`model`] - Tagged directory entries, scan results, duplicate groups.
/// - [`scanner`] - Shallow and recursive folder scanning, background workers.
/// - [`analysis`] - Content-hash duplicate detection and file-type summaries.
/// - [`classify`] - Hidden/system detection and duplicate-scan skip rules.
/// - [`cache`] - Caller-owned cache of scan results with explicit invalidation.
/// - [`cleanup`] - File deletion with per-path outcome reporting.
/// - [`platform`] - OS attribute lookups (Windows hidden/system bits).
pub mod analysis;
pub mod cache;
pub mod classify;
pub mod cleanup;
pub mod error;
pub mod model;
pub mod paths;
pub mod platform;
pub mod scanner;

pub use analysis::duplicates::{find_duplicates, DuplicateOptions};
pub use cache::ScanCache;
pub use error::{Result, ScanError};
pub use model::{DirNode, DirectoryEntry, DuplicateGroup, FileFingerprint, FileNode, ScanResult};
pub use scanner::{scan_folder, ScanOptions};
