/// Path helpers shared by the scanner and the duplicate detector.
use crate::error::{Result, ScanError};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

/// Join a directory path and a child entry name as returned by a listing.
#[inline]
pub fn join(parent: &Path, name: &OsStr) -> PathBuf {
    parent.join(name)
}

/// Return the extension of `name` including the leading dot.
///
/// A name whose only dot is the first character (".bashrc") has no
/// extension. A trailing dot ("notes.") yields ".". The result keeps its
/// original case.
pub fn extension_of(name: &str) -> &str {
    if name == ".." {
        return "";
    }
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx..],
    }
}

/// Open the scan root for listing, mapping failure onto the root error
/// variants. This is the only place a scan call can fail.
pub fn open_root(root: &Path) -> Result<ReadDir> {
    fs::read_dir(root).map_err(|err| ScanError::from_root_io(root.to_path_buf(), err))
}

/// Canonical paths of the directories on the current descent path.
///
/// Directory symlinks are never descended, but bind mounts and junctions the
/// platform does not report as links can still lead back to an ancestor.
/// Refusing to enter a directory that is already open above us keeps the
/// recursion finite. Sibling directories that resolve to the same place are
/// each walked.
#[derive(Debug, Default)]
pub struct AncestorDirs {
    chain: HashSet<PathBuf>,
    entered: u64,
}

impl AncestorDirs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `path` onto the chain. Returns the key to pass to
    /// [`leave`](Self::leave), or `None` if `path` resolves to a directory
    /// that is already an ancestor.
    pub fn enter(&mut self, path: &Path) -> Option<PathBuf> {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if !self.chain.insert(key.clone()) {
            return None;
        }
        self.entered += 1;
        Some(key)
    }

    pub fn leave(&mut self, key: &Path) {
        self.chain.remove(key);
    }

    /// Directories entered so far, including ones already left.
    pub fn entered(&self) -> u64 {
        self.entered
    }

    pub fn depth(&self) -> usize {
        self.chain.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_includes_dot() {
        assert_eq!(extension_of("a.txt"), ".txt");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("Photo.JPG"), ".JPG");
    }

    #[test]
    fn extension_edge_cases() {
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("notes."), ".");
        assert_eq!(extension_of(".."), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn join_appends_name() {
        let joined = join(Path::new("root"), OsStr::new("child.txt"));
        assert_eq!(joined, Path::new("root").join("child.txt"));
    }

    #[test]
    fn ancestor_dirs_refuse_reentry_until_left() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut chain = AncestorDirs::new();

        let key = chain.enter(tmp.path()).expect("first entry succeeds");
        assert!(chain.enter(tmp.path()).is_none());
        // A non-canonical spelling of the same directory is still an ancestor.
        assert!(chain.enter(&tmp.path().join(".")).is_none());
        assert_eq!(chain.depth(), 1);

        chain.leave(&key);
        assert_eq!(chain.depth(), 0);
        assert!(chain.enter(tmp.path()).is_some());
        assert_eq!(chain.entered(), 2);
    }

    #[test]
    fn open_root_missing_is_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = open_root(&tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound { .. }));
    }
}
