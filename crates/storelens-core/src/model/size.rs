/// Human-readable byte counts and file counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used at the
/// display boundary, through the `Display` impls below.
use std::fmt;

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// A byte count that formats with binary units labelled KB/MB/GB/TB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSize(pub u64);

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0 as f64;
        match b {
            b if b < KB => write!(f, "{} B", self.0),
            b if b < MB => write!(f, "{:.1} KB", b / KB),
            b if b < GB => write!(f, "{:.1} MB", b / MB),
            b if b < TB => write!(f, "{:.2} GB", b / GB),
            b => write!(f, "{:.2} TB", b / TB),
        }
    }
}

/// A count that formats with thousand separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(pub u64);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let lead = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - lead) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
