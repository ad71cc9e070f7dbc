/// File attribute lookups.
///
/// Windows marks entries as hidden or system with attribute bits rather than
/// by name. Other platforms have no such bits, so the lookup reports
/// "not set" and callers fall back to the dot-prefix convention.
use std::io;
use std::path::Path;

/// Return whether the Windows hidden or system attribute is set on `path`.
///
/// Fails if the attributes cannot be read (access denied, entry removed
/// between listing and lookup).
#[cfg(windows)]
pub fn has_hidden_or_system_attribute(path: &Path) -> io::Result<bool> {
    use std::os::windows::ffi::OsStrExt;
    use windows::core::PCWSTR;
    use windows::Win32::Storage::FileSystem::{
        GetFileAttributesW, FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_SYSTEM,
        INVALID_FILE_ATTRIBUTES,
    };

    let wide_path: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0u16))
        .collect();

    let attrs = unsafe { GetFileAttributesW(PCWSTR(wide_path.as_ptr())) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(io::Error::last_os_error());
    }

    Ok(attrs & (FILE_ATTRIBUTE_HIDDEN.0 | FILE_ATTRIBUTE_SYSTEM.0) != 0)
}

#[cfg(not(windows))]
pub fn has_hidden_or_system_attribute(_path: &Path) -> io::Result<bool> {
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_has_no_hidden_attribute() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();
        assert!(!has_hidden_or_system_attribute(&file).unwrap());
    }

    #[cfg(windows)]
    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(has_hidden_or_system_attribute(&tmp.path().join("gone")).is_err());
    }
}
