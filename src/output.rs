/// Human-readable and CSV renderings of scan, duplicate and delete results.
///
/// Every function writes to a caller-supplied `Write` so `main` can target
/// stdout and tests can target a buffer.
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use storelens_core::analysis::analyse_file_types;
use storelens_core::cleanup::DeleteReport;
use storelens_core::model::{ByteSize, Count, DuplicateReport};
use storelens_core::{DirectoryEntry, DuplicateGroup, ScanResult};

pub fn scan_text(out: &mut impl Write, result: &ScanResult, duration: Duration) -> io::Result<()> {
    writeln!(out, "{}", result.root_path.display())?;
    writeln!(out, "  visible  {:>12}", ByteSize(result.visible_size_bytes).to_string())?;
    writeln!(out, "  hidden   {:>12}", ByteSize(result.hidden_size_bytes).to_string())?;
    writeln!(out, "  total    {:>12}", ByteSize(result.total_size_bytes()).to_string())?;
    writeln!(out)?;

    let mut entries: Vec<&DirectoryEntry> = result.entries.iter().collect();
    entries.sort_by(|a, b| b.size_bytes().cmp(&a.size_bytes()).then_with(|| a.name().cmp(b.name())));

    for entry in entries {
        match entry {
            DirectoryEntry::Dir(dir) => writeln!(
                out,
                "  {:>12}  {}/  ({} folders, {} files)",
                ByteSize(dir.aggregate_size_bytes).to_string(),
                dir.name,
                Count(dir.subdir_count),
                Count(dir.file_count)
            )?,
            DirectoryEntry::File(file) => writeln!(
                out,
                "  {:>12}  {}  [{}]",
                ByteSize(file.size_bytes).to_string(),
                file.name,
                file.mime_type
            )?,
        }
    }

    let categories = analyse_file_types(result);
    if !categories.is_empty() {
        writeln!(out)?;
        for stats in categories {
            writeln!(
                out,
                "  {:<12} {:>12}  {} files",
                stats.category.label(),
                ByteSize(stats.total_size).to_string(),
                Count(stats.file_count)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} entries in {:.2}s",
        Count(result.entries.len() as u64),
        duration.as_secs_f64()
    )
}

pub fn dupes_text(out: &mut impl Write, groups: &[DuplicateGroup]) -> io::Result<()> {
    for (index, group) in groups.iter().enumerate() {
        writeln!(
            out,
            "Group {} ({} x {}, sha256 {})",
            index + 1,
            group.len(),
            ByteSize(group.size_bytes()),
            group.digest()
        )?;
        for path in group.paths() {
            writeln!(out, "  {}", path.display())?;
        }
        writeln!(out)?;
    }

    let report = DuplicateReport::summarize(groups);
    writeln!(
        out,
        "{} groups, {} redundant files, {} reclaimable",
        Count(report.group_count),
        Count(report.duplicate_file_count),
        ByteSize(report.reclaimable_bytes)
    )
}

#[derive(Serialize)]
struct DuplicateRow<'a> {
    group: usize,
    digest: &'a str,
    path: String,
    extension: &'a str,
    size_bytes: u64,
}

/// One row per file; `group` is 1-based.
pub fn dupes_csv(out: impl Write, groups: &[DuplicateGroup]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for (index, group) in groups.iter().enumerate() {
        for file in &group.files {
            wtr.serialize(DuplicateRow {
                group: index + 1,
                digest: &file.digest,
                path: file.path.display().to_string(),
                extension: &file.extension,
                size_bytes: file.size_bytes,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn delete_text(out: &mut impl Write, report: &DeleteReport) -> io::Result<()> {
    for path in &report.deleted {
        writeln!(out, "deleted  {}", path.display())?;
    }
    for failure in &report.failed {
        writeln!(out, "failed   {}: {}", failure.path.display(), failure.reason)?;
    }
    writeln!(
        out,
        "{} deleted, {} failed",
        Count(report.deleted.len() as u64),
        Count(report.failed.len() as u64)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use storelens_core::cleanup::DeleteFailure;
    use storelens_core::FileFingerprint;

    fn group() -> DuplicateGroup {
        let fp = |path: &str| FileFingerprint {
            path: PathBuf::from(path),
            extension: ".txt".to_string(),
            size_bytes: 2048,
            digest: "ab12".to_string(),
        };
        DuplicateGroup {
            files: vec![fp("/d/a.txt"), fp("/d/b.txt")],
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_file() {
        let mut buf = Vec::new();
        dupes_csv(&mut buf, &[group()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "group,digest,path,extension,size_bytes");
        assert_eq!(lines[1], "1,ab12,/d/a.txt,.txt,2048");
        assert_eq!(lines[2], "1,ab12,/d/b.txt,.txt,2048");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn dupes_text_ends_with_summary() {
        let mut buf = Vec::new();
        dupes_text(&mut buf, &[group()]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("  /d/b.txt"));
        assert!(text.trim_end().ends_with("1 groups, 1 redundant files, 2.0 KB reclaimable"));
    }

    #[test]
    fn scan_text_lists_totals() {
        let result = ScanResult {
            root_path: PathBuf::from("/d"),
            visible_size_bytes: 1536,
            hidden_size_bytes: 10,
            entries: Vec::new(),
        };
        let mut buf = Vec::new();
        scan_text(&mut buf, &result, Duration::from_millis(5)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("visible        1.5 KB"));
        assert!(text.contains("hidden           10 B"));
        assert!(text.contains("0 entries"));
    }

    #[test]
    fn delete_text_reports_failures() {
        let report = DeleteReport {
            deleted: vec![PathBuf::from("/d/a.txt")],
            failed: vec![DeleteFailure {
                path: PathBuf::from("/d/sub"),
                reason: "is a directory".to_string(),
            }],
        };
        let mut buf = Vec::new();
        delete_text(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("failed   /d/sub: is a directory"));
        assert!(text.ends_with("1 deleted, 1 failed\n"));
    }
}
