use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sentinel_scan::application::dto::OutputFormat;
use sentinel_scan::scan_reporting::domain::{Severity, SeverityFilter};

/// Environment variable consulted when `--server` is not given
pub const SERVER_ENV_VAR: &str = "SENTINEL_SCAN_SERVER";

/// Scan source code for security vulnerabilities with a SentinelScan service
#[derive(Parser, Debug)]
#[command(name = "sentinel-scan")]
#[command(version)]
#[command(
    about = "Scan source code for security vulnerabilities with a SentinelScan service",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the scanning service [default: http://localhost:8000]
    #[arg(short, long, global = true, env = SERVER_ENV_VAR, value_name = "URL")]
    pub server: Option<String>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Show only findings of one level: all, high, medium or low [default: all]
    #[arg(short = 'S', long, global = true, value_name = "LEVEL")]
    pub severity: Option<SeverityFilter>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to sentinel-scan.config.yml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when a shown finding is at or above this level
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_severity)]
    pub fail_on: Option<Severity>,

    /// HTTP request timeout in seconds [default: 120]
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// `--fail-on` goes through `FromStr`: only high, medium or low, in any case.
fn parse_severity(value: &str) -> Result<Severity, String> {
    value.parse()
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload files and directories for scanning
    Upload {
        /// Files or directories to upload
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// Scan a public GitHub repository
    Repo {
        /// Repository URL, e.g. https://github.com/owner/repo
        #[arg(value_name = "URL")]
        url: String,
    },
    /// List previous scan reports
    History,
    /// Display one stored report
    Show {
        #[arg(value_name = "SCAN_ID")]
        scan_id: String,
    },
    /// Check that the scanning service is reachable
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        let mut full = vec!["sentinel-scan"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full)
    }

    #[test]
    fn test_parse_upload_with_paths() {
        let args = parse(&["upload", "app.py", "src"]).unwrap();
        match args.command {
            Command::Upload { paths } => {
                assert_eq!(paths, vec![PathBuf::from("app.py"), PathBuf::from("src")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(args.format.is_none());
        assert!(args.severity.is_none());
    }

    #[test]
    fn test_upload_requires_a_path() {
        assert!(parse(&["upload"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&[
            "show", "abc123", "-f", "md", "-S", "high", "--fail-on", "medium", "--no-color",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.severity, Some(SeverityFilter::High));
        assert_eq!(args.fail_on, Some(Severity::Medium));
        assert!(args.no_color);
        assert!(matches!(args.command, Command::Show { ref scan_id } if scan_id == "abc123"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = parse(&["history", "--format", "pdf"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_fail_on_parses_known_levels() {
        assert_eq!(
            parse(&["history", "--fail-on", "HIGH"]).unwrap().fail_on,
            Some(Severity::High)
        );
        assert_eq!(
            parse(&["history", "--fail-on", "low"]).unwrap().fail_on,
            Some(Severity::Low)
        );
    }

    #[test]
    fn test_fail_on_rejects_unknown_level() {
        let err = parse(&["history", "--fail-on", "critical"]).unwrap_err();
        assert!(err.to_string().contains("Invalid severity"));
    }

    #[test]
    fn test_invalid_severity_filter_rejected() {
        assert!(parse(&["history", "--severity", "critical"]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse(&["health", "--timeout", "0"]).is_err());
        assert_eq!(parse(&["health", "--timeout", "5"]).unwrap().timeout, Some(5));
    }

    #[test]
    fn test_missing_command_rejected() {
        assert!(parse(&[]).is_err());
    }
}
