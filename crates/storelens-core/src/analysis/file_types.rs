/// File type lookup based on file extensions.
///
/// One table maps each known extension to a MIME type and a broad category.
/// The MIME string is attached to every scanned file; categories drive the
/// per-type size summary.
use crate::model::{FileNode, ScanResult};
use crate::paths;
use std::collections::HashMap;

/// MIME string reported for extensions not in the table.
pub const UNKNOWN_MIME: &str = "Unknown";

/// Broad file type categories for visual grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FileCategory {
    Documents,
    Images,
    Video,
    Audio,
    Archives,
    Code,
    Executables,
    System,
    Other,
}

impl FileCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Images => "Images",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archives => "Archives",
            Self::Code => "Code",
            Self::Executables => "Executables",
            Self::System => "System",
            Self::Other => "Other",
        }
    }
}

use FileCategory::*;

/// (lowercase extension, MIME type, category)
const EXTENSION_TABLE: &[(&str, &str, FileCategory)] = &[
    // Documents
    ("pdf", "application/pdf", Documents),
    ("doc", "application/msword", Documents),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document", Documents),
    ("xls", "application/vnd.ms-excel", Documents),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", Documents),
    ("ppt", "application/vnd.ms-powerpoint", Documents),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation", Documents),
    ("odt", "application/vnd.oasis.opendocument.text", Documents),
    ("rtf", "application/rtf", Documents),
    ("txt", "text/plain", Documents),
    ("csv", "text/csv", Documents),
    ("md", "text/markdown", Documents),
    ("epub", "application/epub+zip", Documents),
    // Images
    ("jpg", "image/jpeg", Images),
    ("jpeg", "image/jpeg", Images),
    ("png", "image/png", Images),
    ("gif", "image/gif", Images),
    ("bmp", "image/bmp", Images),
    ("svg", "image/svg+xml", Images),
    ("webp", "image/webp", Images),
    ("ico", "image/vnd.microsoft.icon", Images),
    ("tif", "image/tiff", Images),
    ("tiff", "image/tiff", Images),
    ("heic", "image/heic", Images),
    ("heif", "image/heif", Images),
    ("psd", "image/vnd.adobe.photoshop", Images),
    // Video
    ("mp4", "video/mp4", Video),
    ("m4v", "video/x-m4v", Video),
    ("mkv", "video/x-matroska", Video),
    ("avi", "video/x-msvideo", Video),
    ("mov", "video/quicktime", Video),
    ("wmv", "video/x-ms-wmv", Video),
    ("flv", "video/x-flv", Video),
    ("webm", "video/webm", Video),
    ("mpg", "video/mpeg", Video),
    ("mpeg", "video/mpeg", Video),
    ("3gp", "video/3gpp", Video),
    // Audio
    ("mp3", "audio/mpeg", Audio),
    ("wav", "audio/wav", Audio),
    ("flac", "audio/flac", Audio),
    ("aac", "audio/aac", Audio),
    ("ogg", "audio/ogg", Audio),
    ("opus", "audio/opus", Audio),
    ("m4a", "audio/mp4", Audio),
    ("wma", "audio/x-ms-wma", Audio),
    // Archives
    ("zip", "application/zip", Archives),
    ("rar", "application/x-rar-compressed", Archives),
    ("7z", "application/x-7z-compressed", Archives),
    ("tar", "application/x-tar", Archives),
    ("gz", "application/gzip", Archives),
    ("bz2", "application/x-bzip2", Archives),
    ("xz", "application/x-xz", Archives),
    ("zst", "application/zstd", Archives),
    ("iso", "application/x-iso9660-image", Archives),
    ("dmg", "application/x-apple-diskimage", Archives),
    // Code and markup
    ("rs", "text/rust", Code),
    ("py", "text/x-python", Code),
    ("js", "text/javascript", Code),
    ("mjs", "text/javascript", Code),
    ("ts", "text/typescript", Code),
    ("jsx", "text/jsx", Code),
    ("tsx", "text/tsx", Code),
    ("c", "text/x-csrc", Code),
    ("h", "text/x-chdr", Code),
    ("cpp", "text/x-c++src", Code),
    ("hpp", "text/x-c++hdr", Code),
    ("cs", "text/x-csharp", Code),
    ("java", "text/x-java-source", Code),
    ("go", "text/x-go", Code),
    ("rb", "text/x-ruby", Code),
    ("php", "application/x-httpd-php", Code),
    ("html", "text/html", Code),
    ("htm", "text/html", Code),
    ("css", "text/css", Code),
    ("json", "application/json", Code),
    ("xml", "application/xml", Code),
    ("yaml", "application/yaml", Code),
    ("yml", "application/yaml", Code),
    ("toml", "application/toml", Code),
    ("sql", "application/sql", Code),
    ("sh", "application/x-sh", Code),
    ("ps1", "text/x-powershell", Code),
    ("bat", "application/x-msdos-program", Code),
    // Executables
    ("exe", "application/x-msdownload", Executables),
    ("msi", "application/x-msi", Executables),
    ("dll", "application/x-msdownload", Executables),
    ("so", "application/x-sharedlib", Executables),
    ("dylib", "application/x-mach-binary", Executables),
    ("lnk", "application/x-ms-shortcut", Executables),
    // System
    ("sys", "application/octet-stream", System),
    ("dat", "application/octet-stream", System),
    ("bin", "application/octet-stream", System),
    ("log", "text/plain", System),
    ("tmp", "application/octet-stream", System),
    ("bak", "application/octet-stream", System),
    ("ini", "text/plain", System),
    ("reg", "text/x-ms-regedit", System),
];

/// Look up a bare extension (no dot), case-insensitively.
fn lookup(ext: &str) -> Option<&'static (&'static str, &'static str, FileCategory)> {
    EXTENSION_TABLE
        .iter()
        .find(|(known, _, _)| known.eq_ignore_ascii_case(ext))
}

/// Guess a MIME type from a file name's extension.
pub fn mime_type_for(name: &str) -> &'static str {
    let ext = paths::extension_of(name);
    ext.get(1..)
        .and_then(lookup)
        .map(|(_, mime, _)| *mime)
        .unwrap_or(UNKNOWN_MIME)
}

/// Categorise a bare extension (no dot) into a broad category.
pub fn categorise_extension(ext: &str) -> FileCategory {
    lookup(ext).map(|(_, _, cat)| *cat).unwrap_or(Other)
}

/// Size and count totals for a single file category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategoryStats {
    pub category: FileCategory,
    pub total_size: u64,
    pub file_count: u64,
}

/// Per-category totals over the file entries of a scan result, largest
/// category first. Directory entries are not counted.
pub fn analyse_file_types(result: &ScanResult) -> Vec<CategoryStats> {
    let mut map: HashMap<FileCategory, CategoryStats> = HashMap::with_capacity(9);

    for file in result.files() {
        let cat = category_of(file);
        let entry = map.entry(cat).or_insert(CategoryStats {
            category: cat,
            total_size: 0,
            file_count: 0,
        });
        entry.total_size += file.size_bytes;
        entry.file_count += 1;
    }

    let mut results: Vec<CategoryStats> = map.into_values().collect();
    results.sort_by(|a, b| b.total_size.cmp(&a.total_size));
    results
}

fn category_of(file: &FileNode) -> FileCategory {
    paths::extension_of(&file.name)
        .get(1..)
        .map(categorise_extension)
        .unwrap_or(Other)
}
