use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "storelens")]
#[command(about = "Folder size breakdown and duplicate file detection", long_about = None)]
pub struct Cli {
    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report visible and hidden bytes for a folder
    Scan {
        /// Folder to scan
        path: PathBuf,

        /// Walk the whole tree instead of one level
        #[arg(short, long)]
        recursive: bool,

        #[arg(long, value_enum, default_value_t = ScanFormat::Text)]
        format: ScanFormat,
    },
    /// Find files with identical content
    Dupes {
        /// Folder to search
        path: PathBuf,

        /// Group files regardless of extension
        #[arg(long)]
        any_extension: bool,

        #[arg(long, value_enum, default_value_t = DupesFormat::Text)]
        format: DupesFormat,
    },
    /// Delete files (directories are refused)
    Delete {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DupesFormat {
    Text,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_scan_flags() {
        let cli = Cli::parse_from(["storelens", "-v", "scan", "/data", "--recursive", "--format", "json"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Scan {
                path,
                recursive,
                format,
            } => {
                assert_eq!(path, PathBuf::from("/data"));
                assert!(recursive);
                assert_eq!(format, ScanFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn dupes_defaults_to_matching_extensions() {
        let cli = Cli::parse_from(["storelens", "dupes", "."]);
        match cli.command {
            Command::Dupes {
                any_extension,
                format,
                ..
            } => {
                assert!(!any_extension);
                assert_eq!(format, DupesFormat::Text);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn delete_requires_a_path() {
        assert!(Cli::try_parse_from(["storelens", "delete"]).is_err());
    }
}
