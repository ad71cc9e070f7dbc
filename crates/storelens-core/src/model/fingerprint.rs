/// Content fingerprints and duplicate groups.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity of one non-empty file for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFingerprint {
    pub path: PathBuf,
    /// Extension with its leading dot (".jpg"), empty if the name has none.
    /// Case is preserved and comparisons are case-sensitive.
    pub extension: String,
    pub size_bytes: u64,
    /// Lowercase hex SHA-256 of the full file content.
    pub digest: String,
}

/// Files that share a content digest, in discovery order.
///
/// Groups returned by the detector always hold at least two files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DuplicateGroup {
    pub files: Vec<FileFingerprint>,
}

impl DuplicateGroup {
    /// Digest shared by every member.
    pub fn digest(&self) -> &str {
        self.files.first().map(|f| f.digest.as_str()).unwrap_or_default()
    }

    /// Size of each member (identical content means identical size).
    pub fn size_bytes(&self) -> u64 {
        self.files.first().map(|f| f.size_bytes).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Bytes freed by keeping one copy and deleting the rest.
    pub fn reclaimable_bytes(&self) -> u64 {
        self.size_bytes() * self.files.len().saturating_sub(1) as u64
    }

    pub fn paths(&self) -> impl Iterator<Item = &std::path::Path> {
        self.files.iter().map(|f| f.path.as_path())
    }
}

/// Totals across a set of duplicate groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub group_count: u64,
    /// Files beyond the first copy in each group.
    pub duplicate_file_count: u64,
    pub reclaimable_bytes: u64,
}

impl DuplicateReport {
    pub fn summarize(groups: &[DuplicateGroup]) -> Self {
        groups.iter().fold(Self::default(), |mut report, group| {
            report.group_count += 1;
            report.duplicate_file_count += group.len().saturating_sub(1) as u64;
            report.reclaimable_bytes += group.reclaimable_bytes();
            report
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(path: &str, size: u64, digest: &str) -> FileFingerprint {
        FileFingerprint {
            path: PathBuf::from(path),
            extension: crate::paths::extension_of(path).to_string(),
            size_bytes: size,
            digest: digest.to_string(),
        }
    }

    #[test]
    fn group_accessors() {
        let group = DuplicateGroup {
            files: vec![fp("a.txt", 10, "ab"), fp("b.txt", 10, "ab"), fp("c.txt", 10, "ab")],
        };
        assert_eq!(group.digest(), "ab");
        assert_eq!(group.size_bytes(), 10);
        assert_eq!(group.len(), 3);
        assert_eq!(group.reclaimable_bytes(), 20);
    }

    #[test]
    fn report_sums_groups() {
        let groups = vec![
            DuplicateGroup {
                files: vec![fp("a.jpg", 100, "x"), fp("b.jpg", 100, "x")],
            },
            DuplicateGroup {
                files: vec![fp("c.mp3", 7, "y"), fp("d.mp3", 7, "y"), fp("e.mp3", 7, "y")],
            },
        ];
        let report = DuplicateReport::summarize(&groups);
        assert_eq!(report.group_count, 2);
        assert_eq!(report.duplicate_file_count, 3);
        assert_eq!(report.reclaimable_bytes, 100 + 14);
    }

    #[test]
    fn empty_report() {
        assert_eq!(DuplicateReport::summarize(&[]), DuplicateReport::default());
    }

    #[test]
    fn group_serialises_as_plain_list() {
        let group = DuplicateGroup {
            files: vec![fp("a.txt", 1, "d"), fp("b.txt", 1, "d")],
        };
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["extension"], ".txt");
    }
}
