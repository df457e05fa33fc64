//! Configuration file support for sentinel-scan.
//!
//! Provides YAML-based configuration through `sentinel-scan.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::cli::Args;
use sentinel_scan::application::dto::OutputFormat;
use sentinel_scan::scan_reporting::domain::{Severity, SeverityFilter};
use sentinel_scan::shared::error::ScanError;
use sentinel_scan::shared::Result;

pub const CONFIG_FILENAME: &str = "sentinel-scan.config.yml";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub format: Option<String>,
    pub severity: Option<String>,
    pub fail_on: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    pub fn severity_filter(&self) -> Option<SeverityFilter> {
        self.severity.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn fail_on_severity(&self) -> Option<Severity> {
        self.fail_on.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Effective settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_url: String,
    pub format: OutputFormat,
    pub severity: SeverityFilter,
    pub fail_on: Option<Severity>,
    pub timeout: Duration,
}

impl Settings {
    /// CLI flags (and `SENTINEL_SCAN_SERVER`) win over the config file,
    /// which wins over built-in defaults.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let server_url = args
            .server
            .clone()
            .or_else(|| config.and_then(|c| c.server_url.clone()))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let format = args
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();
        let severity = args
            .severity
            .or_else(|| config.and_then(ConfigFile::severity_filter))
            .unwrap_or_default();
        let fail_on = args
            .fail_on
            .clone()
            .or_else(|| config.and_then(ConfigFile::fail_on_severity));
        let timeout_secs = args
            .timeout
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            server_url,
            format,
            severity,
            fail_on,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Loads the explicit `--config` file, or discovers one in `dir`.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    log::debug!("using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let invalid = |message: String, hint: &str| -> anyhow::Error {
        ScanError::InvalidConfig {
            message,
            hint: hint.to_string(),
        }
        .into()
    };

    if let Some(ref server_url) = config.server_url {
        if server_url.trim().is_empty() {
            return Err(invalid(
                "server_url must not be empty".to_string(),
                "Remove the field or set it to the service base URL (e.g., \"http://localhost:8000\").",
            ));
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            return Err(invalid(format!("format: {}", e), "Use text, markdown or json."));
        }
    }

    if let Some(ref severity) = config.severity {
        if let Err(e) = severity.parse::<SeverityFilter>() {
            return Err(invalid(
                format!("severity: {}", e),
                "Use all, high, medium or low.",
            ));
        }
    }

    if let Some(ref fail_on) = config.fail_on {
        if let Err(e) = fail_on.parse::<Severity>() {
            return Err(invalid(
                format!("fail_on: {}", e),
                "Use high, medium or low.",
            ));
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid(
            "timeout_secs must be greater than 0".to_string(),
            "Omit the field to use the default timeout.",
        ));
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
