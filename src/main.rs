//! StoreLens: folder size breakdown and duplicate file finder.
//!
//! Thin binary entry point. All logic lives in the `storelens-core` crate.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, DupesFormat, ScanFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use storelens_core::cleanup::delete_files;
use storelens_core::scanner::{start_duplicate_scan, start_scan, ScanOutcome};
use storelens_core::{DuplicateOptions, ScanOptions};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so JSON and CSV on stdout stay machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    match args.command {
        Command::Scan {
            path,
            recursive,
            format,
        } => run_scan(path, ScanOptions { recursive }, format),
        Command::Dupes {
            path,
            any_extension,
            format,
        } => run_dupes(
            path,
            DuplicateOptions {
                match_extension: !any_extension,
            },
            format,
        ),
        Command::Delete { paths } => run_delete(&paths),
    }
}

fn run_scan(path: PathBuf, options: ScanOptions, format: ScanFormat) -> anyhow::Result<()> {
    let handle = start_scan(path.clone(), options)?;
    let (result, duration) = match handle.wait() {
        ScanOutcome::Complete { result, duration } => (result, duration),
        ScanOutcome::Failed(err) => {
            return Err(err).with_context(|| format!("scan of {} failed", path.display()))
        }
    };

    let mut out = io::stdout().lock();
    match format {
        ScanFormat::Text => output::scan_text(&mut out, &result, duration)?,
        ScanFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result).context("failed to write JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_dupes(path: PathBuf, options: DuplicateOptions, format: DupesFormat) -> anyhow::Result<()> {
    let groups = start_duplicate_scan(path.clone(), options)?
        .wait()
        .into_result()
        .with_context(|| format!("duplicate search in {} failed", path.display()))?;

    let mut out = io::stdout().lock();
    match format {
        DupesFormat::Text => output::dupes_text(&mut out, &groups)?,
        DupesFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &groups).context("failed to write JSON")?;
            writeln!(out)?;
        }
        DupesFormat::Csv => output::dupes_csv(&mut out, &groups).context("failed to write CSV")?,
    }
    Ok(())
}

fn run_delete(paths: &[PathBuf]) -> anyhow::Result<()> {
    let report = delete_files(paths);
    output::delete_text(&mut io::stdout().lock(), &report)?;
    if !report.is_complete() {
        anyhow::bail!("{} of {} files could not be deleted", report.failed.len(), paths.len());
    }
    Ok(())
}
