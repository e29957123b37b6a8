//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Confbundle - bundle a configuration tree into one text file
///
/// Walks a directory recursively and concatenates every readable text
/// file into a single output file, each block prefixed with a
/// `--- <path> ---` header line. Unreadable files are logged and skipped.
///
/// Examples:
///   confbundle
///   confbundle --root ./config --output backend_config.txt
///   confbundle --root ./deploy --sorted
///   confbundle --dry-run
///   confbundle --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Root directory to scan [default: config]
    ///
    /// The walk starts here. A missing directory is not an error:
    /// it simply yields zero files and an empty output artifact.
    #[arg(short, long, value_name = "DIR", env = "CONFBUNDLE_ROOT")]
    pub root: Option<PathBuf>,

    /// Output file path for the bundled artifact [default: backend_config.txt]
    ///
    /// Created (truncating any previous content) before the walk begins.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .confbundle.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Visit files in lexicographic name order
    ///
    /// By default files are visited in whatever order the filesystem
    /// returns them. Sorting makes the output reproducible across runs
    /// and machines, useful for diffing configuration snapshots.
    #[arg(long)]
    pub sorted: bool,

    /// Dry run: walk the tree and list files without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .confbundle.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // The output path must have somewhere to land
        if let Some(ref output) = self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    ));
                }
            }
        }

        // An absent root is allowed and yields an empty bundle, but a
        // root that exists as a plain file is a usage error.
        if let Some(ref root) = self.root {
            if root.exists() && !root.is_dir() {
                return Err(format!("Root path is not a directory: {}", root.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            root: None,
            output: None,
            config: None,
            sorted: false,
            dry_run: false,
            init_config: false,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_root_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir.txt");
        std::fs::write(&file, "x").unwrap();

        let mut args = make_args();
        args.root = Some(file);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_root_is_ok() {
        let mut args = make_args();
        args.root = Some(PathBuf::from("definitely/not/here"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_output_dir() {
        let mut args = make_args();
        args.output = Some(PathBuf::from("no/such/dir/out.txt"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
