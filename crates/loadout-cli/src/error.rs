//! Error handling for the loadout CLI.
//!
//! `CliError` wraps the library and config errors via `#[from]`, so commands
//! can use `?` throughout. At the binary boundary errors become miette
//! reports.

use std::path::PathBuf;

use loadout::AddonError;
use loadout_config::ConfigError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Build config loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A transform or base config was rejected by the builders
    #[error("Composition error: {0}")]
    Addon(#[from] AddonError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::NotFound) => miette::miette!(
            help = "Create a loadout.toml with a [project.transforms] table, or pass --cwd",
            "{}",
            ConfigError::NotFound
        ),
        CliError::Addon(AddonError::InvalidArgument(msg)) => miette::miette!(
            help = "Transforms are either a kind name (\"babel\") or { transformer, config }",
            "{}",
            msg
        ),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let cli_err: CliError = ConfigError::NotFound.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert!(cli_err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn addon_error_converts() {
        let cli_err: CliError = AddonError::InvalidArgument("Invalid extension: \"\"".into()).into();
        assert!(matches!(cli_err, CliError::Addon(_)));
        assert!(cli_err.to_string().contains("Invalid extension"));
    }

    #[test]
    fn miette_report_keeps_message() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("base.json")));
        assert!(report.to_string().contains("base.json"));

        let report = cli_error_to_miette(CliError::Config(ConfigError::NotFound));
        assert!(report.to_string().contains("config not found"));
    }
}
