/// Data model for scan and duplicate-detection results.
///
/// Every type here is a plain value: no handles, no callbacks, no shared
/// references. Results serialise cleanly for IPC or JSON output.
pub mod entry;
pub mod fingerprint;
pub mod scan_result;
pub mod size;

pub use entry::{DirNode, DirectoryEntry, FileNode};
pub use fingerprint::{DuplicateGroup, DuplicateReport, FileFingerprint};
pub use scan_result::ScanResult;
pub use size::{ByteSize, Count};
