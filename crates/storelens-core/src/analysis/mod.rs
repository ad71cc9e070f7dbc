/// Analysis modules: duplicate detection and file-type insights.

pub mod digest;
pub mod duplicates;
pub mod file_types;

pub use duplicates::{find_duplicates, DuplicateOptions};
pub use file_types::{analyse_file_types, categorise_extension, mime_type_for, CategoryStats, FileCategory};
