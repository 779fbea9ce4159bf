//! Error types for build-config loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("base config not found: {}", .path.display())]
    BaseNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found (looked for loadout.toml, loadout.json, package.json#loadout)")]
    NotFound,

    #[error("invalid config value in `{field}`{}", detail(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}{}", hint_suffix(.hint))]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Base webpack config could not be read as a configuration object
    #[error(transparent)]
    Addon(#[from] loadout::AddonError),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn detail(hint: &Option<String>) -> String {
    hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default()
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_deref()
        .map(|h| format!("\n\nHint: {h}"))
        .unwrap_or_default()
}
