/// File deletion with per-path outcome reporting.
///
/// Each path is attempted independently; one locked or missing file never
/// stops the rest. Only regular files (and links) are removed. Directories
/// are refused rather than deleted recursively.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A path that could not be deleted and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a [`delete_files`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<DeleteFailure>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete each file in `paths`.
///
/// Callers holding a [`ScanCache`](crate::ScanCache) should invalidate the
/// parent folders of deleted paths afterwards.
pub fn delete_files(paths: &[PathBuf]) -> DeleteReport {
    let mut report = DeleteReport::default();

    for path in paths {
        let outcome = match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => Err("is a directory".to_string()),
            Ok(_) => fs::remove_file(path).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        match outcome {
            Ok(()) => {
                debug!("Deleted {}", path.display());
                report.deleted.push(path.clone());
            }
            Err(reason) => {
                warn!("Failed to delete {}: {reason}", path.display());
                report.failed.push(DeleteFailure {
                    path: path.clone(),
                    reason,
                });
            }
        }
    }

    info!(
        "Delete complete: {} removed, {} failed",
        report.deleted.len(),
        report.failed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_files_and_reports_failures() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("junk.bin");
        fs::write(&file, b"junk").unwrap();
        let missing = tmp.path().join("missing.bin");
        let dir = tmp.path().join("folder");
        fs::create_dir(&dir).unwrap();

        let report = delete_files(&[file.clone(), missing.clone(), dir.clone()]);

        assert_eq!(report.deleted, vec![file.clone()]);
        assert!(!file.exists());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].path, missing);
        assert_eq!(report.failed[1].path, dir);
        assert!(dir.exists(), "directories must never be removed");
        assert!(!report.is_complete());
    }

    #[test]
    fn empty_input_is_complete() {
        assert!(delete_files(&[]).is_complete());
    }
}
