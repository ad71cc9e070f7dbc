/// Folder walker: computes visible/hidden totals and per-entry metadata.
///
/// The walk is plain depth-first recursion over `std::fs::read_dir`, one
/// entry at a time. Only the scan root's immediate children are emitted as
/// entries; deeper levels contribute totals and child counts.
///
/// # Roll-up rules
///
/// - A file adds its size to its parent's visible or hidden total according
///   to its own classification.
/// - A hidden directory adds its whole subtree (visible + hidden) to its
///   parent's hidden total.
/// - A visible directory passes its visible total up as visible and its
///   hidden total up as hidden. Hidden bytes never turn visible.
///
/// # Links
///
/// A file symlink reports its target's size. A directory symlink is listed
/// and counted as a subdirectory but never descended, so it is emitted with
/// zero counts and zero size. The target's bytes are owned by the target's
/// own entry when it lies inside the tree, and are not counted otherwise.
/// A directory that resolves to one of its own ancestors (bind mounts,
/// junctions not reported as links) is likewise not re-entered.
use crate::classify;
use crate::error::Result;
use crate::model::{DirNode, DirectoryEntry, FileNode, ScanResult};
use crate::paths::{self, AncestorDirs};
use std::fs::{self, ReadDir};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Visible and hidden byte totals for one subtree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Totals {
    visible: u64,
    hidden: u64,
}

impl Totals {
    fn total(self) -> u64 {
        self.visible + self.hidden
    }

    fn add_file(&mut self, size: u64, hidden: bool) {
        if hidden {
            self.hidden += size;
        } else {
            self.visible += size;
        }
    }

    fn absorb_dir(&mut self, inner: Totals, hidden: bool) {
        if hidden {
            self.hidden += inner.total();
        } else {
            self.visible += inner.visible;
            self.hidden += inner.hidden;
        }
    }
}

/// What a directory listing produced: totals, immediate child counts, and
/// (at the scan root only) the emitted entries.
#[derive(Debug, Default)]
struct Listing {
    totals: Totals,
    subdir_count: u64,
    file_count: u64,
    entries: Vec<DirectoryEntry>,
}

/// Which level of the walk a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// The scan root: entries are emitted.
    Root,
    /// Below the root: only totals and counts matter.
    Nested,
}

/// Scan `root`. Fails only if `root` cannot be listed.
pub(crate) fn scan_root(root: &Path, recursive: bool) -> Result<ScanResult> {
    let read_dir = paths::open_root(root)?;
    let start = Instant::now();
    info!(
        "Scanning {} ({})",
        root.display(),
        if recursive { "recursive" } else { "shallow" }
    );

    let mut ancestors = AncestorDirs::new();
    let _root_key = ancestors.enter(root);

    let listing = walk_listing(read_dir, root, recursive, Level::Root, &mut ancestors);

    info!(
        "Scan of {} complete: {} entries, {} visible bytes, {} hidden bytes, {} dirs entered in {:?}",
        root.display(),
        listing.entries.len(),
        listing.totals.visible,
        listing.totals.hidden,
        ancestors.entered(),
        start.elapsed()
    );

    Ok(ScanResult {
        root_path: root.to_path_buf(),
        visible_size_bytes: listing.totals.visible,
        hidden_size_bytes: listing.totals.hidden,
        entries: listing.entries,
    })
}

/// Recurse into a nested directory. A listing failure here yields an empty
/// subtree instead of an error.
fn walk_nested(dir: &Path, ancestors: &mut AncestorDirs) -> Listing {
    match fs::read_dir(dir) {
        Ok(read_dir) => walk_listing(read_dir, dir, true, Level::Nested, ancestors),
        Err(err) => {
            debug!("Cannot list {}: {err}", dir.display());
            Listing::default()
        }
    }
}

fn walk_listing(
    read_dir: ReadDir,
    dir: &Path,
    recursive: bool,
    level: Level,
    ancestors: &mut AncestorDirs,
) -> Listing {
    let mut listing = Listing::default();

    for entry_result in read_dir {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("Skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let path = paths::join(dir, &file_name);
        let is_link = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);

        // Follow links so a linked file reports its target's size.
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(err) => {
                debug!("Skipping {}: {err}", path.display());
                continue;
            }
        };

        let hidden = classify::is_hidden_or_system(&path, &name);
        // Shallow browsing hides hidden entries from the listing; they
        // still count towards the totals.
        let emit = level == Level::Root && (recursive || !hidden);

        if meta.is_dir() {
            listing.subdir_count += 1;

            let inner = if is_link {
                debug!("Not following directory link {}", path.display());
                Listing::default()
            } else if !recursive {
                peek_dir(&path)
            } else if let Some(key) = ancestors.enter(&path) {
                let nested = walk_nested(&path, ancestors);
                ancestors.leave(&key);
                nested
            } else {
                debug!("{} resolves to an ancestor, not descending", path.display());
                Listing::default()
            };
            listing.totals.absorb_dir(inner.totals, hidden);

            if emit {
                listing.entries.push(DirectoryEntry::Dir(DirNode::from_metadata(
                    &name,
                    &meta,
                    inner.subdir_count,
                    inner.file_count,
                    inner.totals.total(),
                )));
            }
        } else {
            listing.file_count += 1;
            listing.totals.add_file(meta.len(), hidden);

            if emit {
                listing
                    .entries
                    .push(DirectoryEntry::File(FileNode::from_metadata(&name, &meta)));
            }
        }
    }

    listing
}

/// Read exactly one level of `dir` for a shallow scan: child counts plus the
/// sizes of its immediate files as an approximate size hint.
fn peek_dir(dir: &Path) -> Listing {
    let mut listing = Listing::default();

    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) => {
            debug!("Cannot list {}: {err}", dir.display());
            return listing;
        }
    };

    for entry in read_dir.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let path = paths::join(dir, &file_name);
        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };

        if meta.is_dir() {
            listing.subdir_count += 1;
        } else {
            listing.file_count += 1;
            let hidden = classify::is_hidden_or_system(&path, &name);
            listing.totals.add_file(meta.len(), hidden);
        }
    }

    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_dir_keeps_hidden_bytes_hidden() {
        let mut parent = Totals::default();
        parent.absorb_dir(
            Totals {
                visible: 10,
                hidden: 5,
            },
            false,
        );
        assert_eq!(parent, Totals { visible: 10, hidden: 5 });
    }

    #[test]
    fn hidden_dir_rolls_everything_into_hidden() {
        let mut parent = Totals::default();
        parent.absorb_dir(
            Totals {
                visible: 10,
                hidden: 5,
            },
            true,
        );
        assert_eq!(parent, Totals { visible: 0, hidden: 15 });
    }

    #[test]
    fn files_split_by_classification() {
        let mut totals = Totals::default();
        totals.add_file(7, false);
        totals.add_file(3, true);
        assert_eq!(totals.total(), 10);
        assert_eq!(totals.hidden, 3);
    }
}
