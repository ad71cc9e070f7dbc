/// The value returned by a folder scan.
use super::entry::{DirNode, DirectoryEntry, FileNode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Size totals and immediate children of one scanned folder.
///
/// `visible_size_bytes + hidden_size_bytes` is the best-effort total of
/// everything under `root_path` at scan time. Entries that could not be
/// read are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub root_path: PathBuf,
    pub visible_size_bytes: u64,
    pub hidden_size_bytes: u64,
    /// Immediate children in directory-listing order.
    pub entries: Vec<DirectoryEntry>,
}

impl ScanResult {
    /// Visible plus hidden bytes.
    pub fn total_size_bytes(&self) -> u64 {
        self.visible_size_bytes + self.hidden_size_bytes
    }

    /// File entries only.
    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.entries.iter().filter_map(|entry| match entry {
            DirectoryEntry::File(file) => Some(file),
            DirectoryEntry::Dir(_) => None,
        })
    }

    /// Directory entries only.
    pub fn dirs(&self) -> impl Iterator<Item = &DirNode> {
        self.entries.iter().filter_map(|entry| match entry {
            DirectoryEntry::Dir(dir) => Some(dir),
            DirectoryEntry::File(_) => None,
        })
    }

    /// Find an immediate child by name.
    pub fn entry(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }
}
