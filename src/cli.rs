//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// SpaceX Dash - interactive launch records dashboard
///
/// Loads a launch records CSV once and serves a single-page dashboard
/// with a success pie chart and a payload/outcome scatter plot.
///
/// Examples:
///   spacex-dash --data spacex_launch_dash.csv
///   spacex-dash --data spacex_launch_dash.csv --port 8080
///   spacex-dash --data spacex_launch_dash.csv --check
///   spacex-dash --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Launch records CSV to load
    ///
    /// Overrides `data.path` from the configuration file.
    #[arg(short, long, value_name = "FILE", env = "SPACEX_DASH_DATA")]
    pub data: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind the HTTP listener to (default: 8051)
    #[arg(short, long, value_name = "PORT", env = "SPACEX_DASH_PORT")]
    pub port: Option<u16>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .spacex-dash.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Load the dataset, print per-site totals and exit without serving
    #[arg(long, conflicts_with = "snapshot")]
    pub check: bool,

    /// Print the initial dashboard layout and figures as JSON and exit
    #[arg(long)]
    pub snapshot: bool,

    /// Generate a default .spacex-dash.toml configuration file
    #[arg(long)]
    pub init_config: bool,
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

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.port == Some(0) {
            return Err("Port must be between 1 and 65535".to_string());
        }

        if let Some(ref data) = self.data {
            if !data.exists() {
                return Err(format!("Dataset file does not exist: {}", data.display()));
            }
            if !data.is_file() {
                return Err(format!("Dataset path is not a file: {}", data.display()));
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
            data: None,
            host: None,
            port: None,
            config: None,
            verbose: false,
            quiet: false,
            check: false,
            snapshot: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "spacex-dash",
            "--data",
            "launches.csv",
            "--port",
            "9000",
            "--check",
        ])
        .unwrap();

        assert_eq!(args.data, Some(PathBuf::from("launches.csv")));
        assert_eq!(args.port, Some(9000));
        assert!(args.check);
        assert!(!args.snapshot);
    }

    #[test]
    fn test_check_conflicts_with_snapshot() {
        let result = Args::try_parse_from(["spacex-dash", "--check", "--snapshot"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_dataset() {
        let mut args = make_args();
        args.data = Some(PathBuf::from("/nonexistent/launches.csv"));
        assert!(args.validate().is_err());

        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut args = make_args();
        args.port = Some(0);
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
