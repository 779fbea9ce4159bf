//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::Path;

use crate::config::LoadoutConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a build config
    fn validate(&self, config: &LoadoutConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use loadout_config::{ConfigValidator, LoadoutConfig, SchemaValidator};
/// use serde_json::json;
///
/// let config = LoadoutConfig::from_value(json!({
///     "project": { "transforms": { "js": "babel" } }
/// }))
/// .unwrap();
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &LoadoutConfig) -> Result<()> {
        for extension in config.project.transforms.keys() {
            if extension.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "transform extensions cannot be empty".to_string(),
                    hint: Some("Remove empty keys from the 'transforms' table".to_string()),
                });
            }

            if extension.starts_with('.') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("transform extension '{extension}' has a leading dot"),
                    hint: Some(format!(
                        "Write the extension without the dot: '{}'",
                        extension.trim_start_matches('.')
                    )),
                });
            }

            if extension.chars().any(char::is_whitespace) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("transform extension '{extension}' contains whitespace"),
                    hint: None,
                });
            }
        }

        if let Some(vendor) = &config.project.optimization.extract_vendor {
            if vendor.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "vendor chunk name cannot be blank".to_string(),
                    hint: Some("Set extractVendor to a chunk name or false".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the base config referenced by the build config exists on disk.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &LoadoutConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        if let Some(base) = &config.base {
            let path = self.root.join(base);
            if !path.exists() {
                return Err(ConfigError::BaseNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &LoadoutConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &LoadoutConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
