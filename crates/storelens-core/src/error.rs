/// Error taxonomy for scan and duplicate-detection calls.
///
/// Only failures at the scan root are surfaced. Anything that goes wrong
/// below the root (an unreadable child, a file that vanished mid-walk, a
/// failed attribute lookup) is recovered where it happens and shows up only
/// as an omission from the results.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("folder not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// The root path exists but cannot be listed (permissions, not a
    /// directory, device error).
    #[error("could not read folder {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The OS refused to start a worker thread.
    #[error("failed to spawn scan worker: {0}")]
    WorkerSpawn(#[source] io::Error),

    /// The worker thread ended without delivering an outcome.
    #[error("scan worker exited without a result")]
    WorkerLost,
}

impl ScanError {
    /// Classify an I/O error raised while opening the root.
    pub(crate) fn from_root_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::RootNotFound { path }
        } else {
            Self::RootUnreadable { path, source }
        }
    }
}
