//! High-level build-config structure for loadout.
//!
//! This module provides the main `LoadoutConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use loadout::{ProjectConfig, Transform, WebpackConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadoutConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    /// Webpack config JSON the project is applied on top of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    /// Top-level `transforms` table, as written in a bare build-config
    #[serde(default)]
    #[serde(rename = "transforms")]
    #[serde(skip_serializing)]
    extra_transforms: IndexMap<String, Transform>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub project: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,
}

impl LoadoutConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use loadout_config::LoadoutConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "project": {
    ///         "transforms": { "js": "babel", "less": "less" },
    ///         "optimization": { "extractCommon": true }
    ///     }
    /// });
    ///
    /// let config = LoadoutConfig::from_value(value).unwrap();
    /// assert_eq!(config.project.transforms.len(), 2);
    /// assert!(config.project.optimization.extract_common);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let mut config: LoadoutConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
                field: "config".to_string(),
                hint: Some(e.to_string()),
            })?;
        config.promote_top_level_transforms();
        Ok(config)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Read the base webpack config, resolving `base` against `root`.
    ///
    /// Without a `base` entry the project is applied to an empty config.
    pub fn load_base(&self, root: impl AsRef<Path>) -> ConfigResult<WebpackConfig> {
        let Some(base) = &self.base else {
            return Ok(WebpackConfig::default());
        };

        let path = root.as_ref().join(base);
        if !path.exists() {
            return Err(ConfigError::BaseNotFound { path });
        }

        let content = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "base".to_string(),
            hint: Some(format!("Invalid JSON in {}: {}", path.display(), e)),
        })?;

        debug!(path = %path.display(), "loaded base config");
        Ok(WebpackConfig::from_value(value)?)
    }
}

impl LoadoutConfig {
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        self.promote_top_level_transforms();

        let Some(name) = profile else {
            return Ok(self);
        };
        let Some(profile_cfg) = self.profiles.get(name) else {
            warn!(profile = name, "profile not defined, using base settings");
            return Ok(self);
        };

        if !profile_cfg.project.is_null() {
            let mut base = serde_json::to_value(&self.project).map_err(|err| {
                ConfigError::InvalidProfileOverride {
                    message: err.to_string(),
                }
            })?;
            merge_values(&mut base, &profile_cfg.project);
            self.project = serde_json::from_value(base).map_err(|err| {
                ConfigError::InvalidProfileOverride {
                    message: err.to_string(),
                }
            })?;
        }

        if let Some(base) = &profile_cfg.base {
            self.base = Some(base.clone());
        }

        debug!(profile = name, "applied profile overrides");
        Ok(self)
    }

    fn promote_top_level_transforms(&mut self) {
        if self.extra_transforms.is_empty() {
            return;
        }

        for (extension, transform) in self.extra_transforms.drain(..) {
            self.project.transforms.insert(extension, transform);
        }
    }

    /// Reorder transform tables to follow `order` (missing keys go last).
    pub(crate) fn reorder_transforms(&mut self, project_order: &[String], top_order: &[String]) {
        sort_by_declaration(&mut self.project.transforms, project_order);
        sort_by_declaration(&mut self.extra_transforms, top_order);
    }
}

fn sort_by_declaration(map: &mut IndexMap<String, Transform>, order: &[String]) {
    let rank = |key: &String| order.iter().position(|k| k == key).unwrap_or(usize::MAX);
    map.sort_by(|a, _, b, _| rank(a).cmp(&rank(b)));
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout::TransformKind;
    use serde_json::json;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "project": {
                "transforms": { "ts": "ts" },
                "optimization": { "extractVendor": "vendor" }
            },
            "base": "webpack.base.json"
        });

        let config = LoadoutConfig::from_value(value).unwrap();
        assert_eq!(config.project.transforms["ts"].transformer, TransformKind::Ts);
        assert_eq!(
            config.project.optimization.extract_vendor.as_deref(),
            Some("vendor")
        );
        assert_eq!(config.base, Some(PathBuf::from("webpack.base.json")));
    }

    #[test]
    fn top_level_transforms_are_promoted() {
        let value = json!({
            "project": { "transforms": { "js": "babel" } },
            "transforms": { "less": "less", "js": "flow" }
        });

        let config = LoadoutConfig::from_value(value).unwrap();
        let keys: Vec<_> = config.project.transforms.keys().cloned().collect();
        assert_eq!(keys, vec!["js", "less"]);
        assert_eq!(config.project.transforms["js"].transformer, TransformKind::Flow);
    }

    #[test]
    fn to_value_serializes_config() {
        let config = LoadoutConfig::from_value(json!({
            "project": { "transforms": { "css": "css" } }
        }))
        .unwrap();

        let value = config.to_value().unwrap();
        assert_eq!(
            value["project"]["transforms"]["css"],
            json!({ "transformer": "css" })
        );
        assert!(value.get("transforms").is_none());
    }

    #[test]
    fn profile_merging_works() {
        let value = json!({
            "project": {
                "transforms": { "js": "babel" },
                "optimization": { "extractCommon": false }
            },
            "profiles": {
                "production": {
                    "project": {
                        "transforms": { "js": { "config": { "compact": true } } },
                        "optimization": { "extractCommon": true }
                    }
                }
            }
        });

        let config = LoadoutConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("production"))
            .unwrap();

        assert!(config.project.optimization.extract_common);
        let js = &config.project.transforms["js"];
        assert_eq!(js.transformer, TransformKind::Babel);
        assert_eq!(js.config, Some(json!({ "compact": true })));
    }

    #[test]
    fn unknown_profile_is_ignored() {
        let config = LoadoutConfig::from_value(json!({ "project": { "transforms": { "js": "babel" } } }))
            .unwrap()
            .materialize_profile(Some("staging"))
            .unwrap();
        assert_eq!(config.project.transforms.len(), 1);
    }

    #[test]
    fn merge_replaces_arrays_and_scalars() {
        let mut target = json!({ "a": [1, 2], "b": { "c": 1, "d": 2 } });
        merge_values(&mut target, &json!({ "a": [3], "b": { "d": 5 } }));
        assert_eq!(target, json!({ "a": [3], "b": { "c": 1, "d": 5 } }));
    }
}
