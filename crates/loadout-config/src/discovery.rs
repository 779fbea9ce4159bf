//! File-based config discovery for CLI use
//!
//! Handles finding and loading loadout build-config files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::LoadoutConfig;
use crate::error::{ConfigError, Result};

pub const TOML_FILE: &str = "loadout.toml";
pub const JSON_FILE: &str = "loadout.json";
pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_FIELD: &str = "loadout";

/// File-based configuration discovery
///
/// Searches for loadout configuration files in conventional locations and loads them.
/// This is primarily for CLI use - library users should use `LoadoutConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use loadout_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: loadout.toml
    /// 2. JSON config: loadout.json
    /// 3. package.json (loadout field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in [TOML_FILE, JSON_FILE] {
            let path = self.root.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        // package.json with loadout field
        let pkg_path = self.root.join(PACKAGE_JSON);
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<LoadoutConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        LoadoutConfig::from_value(self.read_value(&path)?)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<LoadoutConfig> {
        let config = self.load()?;
        config.materialize_profile(Some(profile))
    }

    /// Read a config file into an order-preserving JSON value
    pub fn read_value(&self, path: &Path) -> Result<Value> {
        debug!(path = %path.display(), "reading build config");

        if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
            return self.read_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        if path.extension() == Some(std::ffi::OsStr::new("json")) {
            return serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "json".to_string(),
                hint: Some(format!("Invalid JSON syntax: {}", e)),
            });
        }

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })
    }

    fn read_package_json(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let value = parsed.get(PACKAGE_FIELD).ok_or_else(|| ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("Add a 'loadout' field to your package.json".to_string()),
        })?;

        if value.is_null() {
            return Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("The 'loadout' field cannot be null".to_string()),
            });
        }

        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("loadout.toml");
        fs::write(
            &config_path,
            r#"
[project.transforms]
js = "babel"
"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), config_path);
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let result = discovery.load();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn package_json_without_field_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn invalid_toml_reports_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("loadout.toml"), "[project\n").unwrap();

        let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "toml"));
    }
}
