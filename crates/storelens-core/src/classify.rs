/// Directory entry classification.
///
/// Two independent questions are answered per entry:
///
/// 1. **Hidden/system?** Drives the visible/hidden split of scan totals.
///    Used by the folder scanner.
/// 2. **Noise?** Build output, VCS metadata, caches, lockfiles and logs are
///    excluded from duplicate detection so the results only name files the
///    user actually owns. The folder scanner never skips anything: it must
///    account for every byte that occupies space.
///
/// Lookup failures always resolve to "visible" and "keep". Misclassifying an
/// entry as hidden would silently move space out of the user's view.
use crate::paths;
use crate::platform;
use std::path::Path;
use tracing::trace;

/// Directory-name fragments that mark a folder as noise for duplicate
/// detection. Matched case-insensitively as substrings.
pub const SKIP_DIR_PATTERNS: &[&str] = &[
    // Dependency packages
    "node_modules",
    "bower_components",
    "vendor",
    "packages",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Temp / cache / logs / backups
    "temp",
    "tmp",
    "cache",
    "logs",
    "backup",
    // Build intermediates and engine-generated folders
    "autogen",
    "intermediate",
    "saved",
    "deriveddata",
    "__pycache__",
    ".vs",
    ".idea",
];

/// Lowercase extensions (without the dot) of throwaway files.
pub const SKIP_FILE_EXTENSIONS: &[&str] = &[
    "tmp",
    "temp",
    "log",
    "bak",
    "old",
    "swp",
    "swo",
    "cache",
    "dmp",
    "crdownload",
    "part",
];

/// Lowercase file names that are OS metadata, lockfiles, editor config or
/// known game cache artifacts rather than user data.
pub const SKIP_FILE_NAMES: &[&str] = &[
    ".ds_store",
    "thumbs.db",
    "desktop.ini",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "cargo.lock",
    ".editorconfig",
    ".gitignore",
    ".gitattributes",
    "steam_autocloud.vdf",
    "shadercache.bin",
];

/// Return whether an entry should be treated as hidden or system.
///
/// Windows consults the hidden/system attribute bits; an attribute read
/// failure counts as visible. Everywhere else a leading dot means hidden.
pub fn is_hidden_or_system(path: &Path, name: &str) -> bool {
    if cfg!(windows) {
        match platform::has_hidden_or_system_attribute(path) {
            Ok(hidden) => hidden,
            Err(err) => {
                trace!("Attribute lookup failed for {}: {err}", path.display());
                false
            }
        }
    } else {
        name.starts_with('.')
    }
}

/// Return whether the duplicate detector should ignore this directory and
/// everything under it.
pub fn should_skip_directory(name: &str) -> bool {
    let lower = name.to_lowercase();
    SKIP_DIR_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Return whether the duplicate detector should ignore this file.
pub fn should_skip_file(name: &str) -> bool {
    let lower = name.to_lowercase();

    if SKIP_FILE_NAMES.contains(&lower.as_str()) || lower.ends_with(".lock") {
        return true;
    }

    let ext = paths::extension_of(&lower);
    !ext.is_empty() && SKIP_FILE_EXTENSIONS.contains(&&ext[1..])
}
