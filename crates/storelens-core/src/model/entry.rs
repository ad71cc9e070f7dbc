/// A single file or directory reported by a folder scan.
///
/// Files and directories carry different metadata, so they are separate
/// structs joined by a tagged enum. Consumers must handle both shapes.
use crate::analysis::file_types::mime_type_for;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::io;
use std::time::SystemTime;

/// One immediate child of a scanned folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectoryEntry {
    File(FileNode),
    Dir(DirNode),
}

impl DirectoryEntry {
    /// Entry name only (NOT the full path).
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Dir(dir) => &dir.name,
        }
    }

    /// `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }

    /// File size, or the directory's aggregate size.
    pub fn size_bytes(&self) -> u64 {
        match self {
            Self::File(file) => file.size_bytes,
            Self::Dir(dir) => dir.aggregate_size_bytes,
        }
    }
}

/// A regular file (or anything that is not a directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: CompactString,
    /// Logical size in bytes.
    pub size_bytes: u64,
    pub modified_at: Option<DateTime<Utc>>,
    /// `None` where the platform or filesystem does not record birth time.
    pub created_at: Option<DateTime<Utc>>,
    /// MIME type guessed from the extension, `"Unknown"` when unrecognised.
    pub mime_type: CompactString,
}

impl FileNode {
    /// Build a file node from its name and stat result.
    pub fn from_metadata(name: &str, meta: &Metadata) -> Self {
        Self {
            name: CompactString::new(name),
            size_bytes: meta.len(),
            modified_at: to_utc(meta.modified()),
            created_at: to_utc(meta.created()),
            mime_type: CompactString::new(mime_type_for(name)),
        }
    }
}

/// A directory with child counts and a size figure.
///
/// `subdir_count + file_count == 0` exactly when `is_empty` is set.
/// `aggregate_size_bytes` is the exact subtree total for recursive scans and
/// the size of the directory's immediate files for shallow scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirNode {
    pub name: CompactString,
    pub modified_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub is_empty: bool,
    pub subdir_count: u64,
    pub file_count: u64,
    pub aggregate_size_bytes: u64,
}

impl DirNode {
    /// Build a directory node. `is_empty` is derived from the counts so the
    /// two can never disagree.
    pub fn from_metadata(
        name: &str,
        meta: &Metadata,
        subdir_count: u64,
        file_count: u64,
        aggregate_size_bytes: u64,
    ) -> Self {
        Self {
            name: CompactString::new(name),
            modified_at: to_utc(meta.modified()),
            created_at: to_utc(meta.created()),
            is_empty: subdir_count + file_count == 0,
            subdir_count,
            file_count,
            aggregate_size_bytes,
        }
    }
}

/// Timestamps the platform cannot supply become `None`.
fn to_utc(time: io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    time.ok().map(DateTime::<Utc>::from)
}
