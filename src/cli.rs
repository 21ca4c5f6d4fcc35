//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Gradebook - track students and grades from a text menu
///
/// Add students and grades interactively, then view per-student reports,
/// the class table, top performers and passing/failing lists.
///
/// Examples:
///   gradebook
///   gradebook --demo
///   gradebook --demo --no-menu --format json
///   gradebook --top 3 --config ./class.toml
///   gradebook --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Load demo data and print the demo reports without asking
    #[arg(long, conflicts_with = "no_demo")]
    pub demo: bool,

    /// Skip the demo without asking
    #[arg(long, conflicts_with = "demo")]
    pub no_demo: bool,

    /// Exit after the demo instead of opening the menu
    #[arg(long)]
    pub no_menu: bool,

    /// Number of students listed under Top Performers
    ///
    /// Overrides `report.top_count` from the config file (default 5).
    #[arg(long, value_name = "COUNT", env = "GRADEBOOK_TOP")]
    pub top: Option<usize>,

    /// Output format for the closing summary of a --no-menu run
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .gradebook.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only in the log)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .gradebook.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the class summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.top == Some(0) {
            return Err("Top performer count must be at least 1".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                return Err(format!(
                    "Config file does not exist: {}",
                    config_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// Stays at WARN by default since the menu owns the terminal.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_args() -> Args {
        Args {
            demo: false,
            no_demo: false,
            no_menu: false,
            top: None,
            format: OutputFormat::Text,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from(["gradebook", "--demo", "--top", "3", "--format", "json"])
            .unwrap();
        assert!(args.demo);
        assert_eq!(args.top, Some(3));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_demo_flags_conflict() {
        assert!(Args::try_parse_from(["gradebook", "--demo", "--no-demo"]).is_err());
    }

    #[test]
    fn test_validation_zero_top() {
        let mut args = make_args();
        args.top = Some(0);
        assert!(args.validate().is_err());

        args.top = Some(1);
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
    fn test_validation_missing_config() {
        let mut args = make_args();
        args.config = Some(PathBuf::from("/definitely/not/here.toml"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::WARN);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
