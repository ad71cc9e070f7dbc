/// Duplicate file detection by whole-file SHA-256 digest.
///
/// # Algorithm
///
/// 1. Depth-first walk from the root (`jwalk`, serial, siblings sorted by
///    name, links not followed). Noise directories below the root (see
///    [`classify::should_skip_directory`]) are pruned with their subtree.
///    The root itself is always walked, whatever its name.
/// 2. Every regular file that is non-empty and not noise is hashed by
///    streaming its content.
/// 3. Fingerprints are bucketed by digest in discovery order. With
///    extension matching on, a file joins an existing bucket only if its
///    extension equals that of the bucket's *first* member; otherwise it is
///    dropped.
/// 4. Buckets with fewer than two members are discarded.
///
/// The walk is single-threaded: one open file and one hash in flight at a
/// time. Sorting siblings makes discovery order, and therefore which
/// extension leads a bucket, the same on every platform.
use crate::analysis::digest::hash_file;
use crate::classify;
use crate::error::Result;
use crate::model::{DuplicateGroup, FileFingerprint};
use crate::paths;
use jwalk::{Parallelism, WalkDir};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Policy flags for [`find_duplicates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateOptions {
    /// Require the same extension as the first file seen with a digest.
    pub match_extension: bool,
}

impl Default for DuplicateOptions {
    fn default() -> Self {
        Self {
            match_extension: true,
        }
    }
}

/// Find groups of files with identical content under `root`.
///
/// Fails only if `root` itself cannot be opened. Unreadable files and
/// directories below it are skipped.
pub fn find_duplicates(root: &Path, options: &DuplicateOptions) -> Result<Vec<DuplicateGroup>> {
    // Probe the root up front: jwalk reports a bad root as an ordinary
    // walk error, which would otherwise be swallowed with the rest.
    drop(paths::open_root(root)?);

    let start = Instant::now();
    info!(
        "Finding duplicates under {} (match_extension = {})",
        root.display(),
        options.match_extension
    );

    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .process_read_dir(|depth, _path, _state, children| {
            // `None` is the synthetic listing that holds the root itself.
            if depth.is_none() {
                return;
            }
            children.retain(|child| match child {
                Ok(entry) => {
                    !(entry.file_type().is_dir()
                        && classify::should_skip_directory(&entry.file_name().to_string_lossy()))
                }
                Err(_) => true,
            });
        });

    let mut buckets = DigestBuckets::new(options.match_extension);
    let mut files_hashed: u64 = 0;
    let mut skipped: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("Skipping unreadable entry: {err}");
                skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if classify::should_skip_file(&name) {
            continue;
        }

        let path = entry.path();
        let size_bytes = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                debug!("Skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        if size_bytes == 0 {
            continue;
        }

        let digest = match hash_file(&path) {
            Ok(d) => d,
            Err(err) => {
                debug!("Skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        files_hashed += 1;

        buckets.add(FileFingerprint {
            extension: paths::extension_of(&name).to_string(),
            path,
            size_bytes,
            digest,
        });
    }

    let groups = buckets.into_groups();
    info!(
        "Duplicate scan complete: {} files hashed, {} skipped, {} groups in {:?}",
        files_hashed,
        skipped,
        groups.len(),
        start.elapsed()
    );
    Ok(groups)
}

/// Digest → fingerprints, preserving first-seen order of digests.
#[derive(Debug)]
pub(crate) struct DigestBuckets {
    match_extension: bool,
    index: HashMap<String, usize>,
    buckets: Vec<Vec<FileFingerprint>>,
}

impl DigestBuckets {
    pub(crate) fn new(match_extension: bool) -> Self {
        Self {
            match_extension,
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    /// Record a fingerprint. Returns `false` if it was dropped because its
    /// extension differs from the bucket's first member.
    pub(crate) fn add(&mut self, fingerprint: FileFingerprint) -> bool {
        match self.index.get(&fingerprint.digest) {
            Some(&slot) => {
                let bucket = &mut self.buckets[slot];
                if self.match_extension && bucket[0].extension != fingerprint.extension {
                    debug!(
                        "Not grouping {}: extension differs from {}",
                        fingerprint.path.display(),
                        bucket[0].path.display()
                    );
                    return false;
                }
                bucket.push(fingerprint);
            }
            None => {
                self.index
                    .insert(fingerprint.digest.clone(), self.buckets.len());
                self.buckets.push(vec![fingerprint]);
            }
        }
        true
    }

    /// Keep buckets with two or more members, in discovery order.
    pub(crate) fn into_groups(self) -> Vec<DuplicateGroup> {
        self.buckets
            .into_iter()
            .filter(|files| files.len() >= 2)
            .map(|files| DuplicateGroup { files })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fp(path: &str, digest: &str) -> FileFingerprint {
        FileFingerprint {
            path: PathBuf::from(path),
            extension: paths::extension_of(path).to_string(),
            size_bytes: 5,
            digest: digest.to_string(),
        }
    }

    fn names(group: &DuplicateGroup) -> Vec<String> {
        group.paths().map(|p| p.display().to_string()).collect()
    }

    #[test]
    fn singletons_are_dropped() {
        let mut buckets = DigestBuckets::new(true);
        buckets.add(fp("a.txt", "1"));
        buckets.add(fp("b.txt", "2"));
        assert!(buckets.into_groups().is_empty());
    }

    #[test]
    fn matching_extension_groups_only_same_extension() {
        let mut buckets = DigestBuckets::new(true);
        assert!(buckets.add(fp("a.txt", "h")));
        assert!(buckets.add(fp("b.txt", "h")));
        assert!(!buckets.add(fp("c.md", "h")));
        let groups = buckets.into_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn any_extension_groups_everything() {
        let mut buckets = DigestBuckets::new(false);
        buckets.add(fp("a.txt", "h"));
        buckets.add(fp("b.txt", "h"));
        buckets.add(fp("c.md", "h"));
        let groups = buckets.into_groups();
        assert_eq!(names(&groups[0]), vec!["a.txt", "b.txt", "c.md"]);
    }

    /// The first file recorded under a digest fixes the extension for the
    /// whole bucket, even if later files agree among themselves.
    #[test]
    fn first_seen_extension_wins() {
        let mut buckets = DigestBuckets::new(true);
        buckets.add(fp("a.jpg", "h"));
        buckets.add(fp("b.png", "h"));
        buckets.add(fp("c.png", "h"));
        assert!(
            buckets.into_groups().is_empty(),
            "png files must not form a group behind a jpg-led bucket"
        );
    }

    #[test]
    fn extension_comparison_is_case_sensitive() {
        let mut buckets = DigestBuckets::new(true);
        buckets.add(fp("a.JPG", "h"));
        assert!(!buckets.add(fp("b.jpg", "h")));
    }

    #[test]
    fn discovery_order_across_buckets() {
        let mut buckets = DigestBuckets::new(false);
        buckets.add(fp("z1", "z"));
        buckets.add(fp("a1", "a"));
        buckets.add(fp("a2", "a"));
        buckets.add(fp("z2", "z"));
        let groups = buckets.into_groups();
        assert_eq!(groups[0].digest(), "z");
        assert_eq!(groups[1].digest(), "a");
    }

    #[test]
    fn default_options_match_extension() {
        assert!(DuplicateOptions::default().match_extension);
        let parsed: DuplicateOptions = serde_json::from_str("{}").unwrap();
        assert!(parsed.match_extension);
    }
}
