//! Whole-project composition: every transform, then the split-chunks policy.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::chunks::{OptimizationOptions, build_split_chunks};
use crate::error::{AddonError, Result};
use crate::model::WebpackConfig;
use crate::rules::build_rule;
use crate::transform::Transform;

/// Per-project build settings: which transform handles each extension, and
/// how chunks are split
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Extension (without dot) to transform, in declaration order
    #[serde(default)]
    pub transforms: IndexMap<String, Transform>,

    #[serde(default)]
    pub optimization: OptimizationOptions,
}

impl ProjectConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use loadout::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let project = ProjectConfig::from_value(json!({
    ///     "transforms": { "js": "babel", "less": { "transformer": "less" } },
    ///     "optimization": { "extractVendor": "vendor" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(project.transforms.len(), 2);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| AddonError::InvalidConfig(e.to_string()))
    }

    pub fn with_transform(
        mut self,
        extension: impl Into<String>,
        transform: impl Into<Transform>,
    ) -> Self {
        self.transforms.insert(extension.into(), transform.into());
        self
    }
}

/// Apply every transform of `project` in declaration order, then its
/// optimization policy.
///
/// # Errors
///
/// The first builder error aborts the composition; no partial configuration
/// is returned.
pub fn apply_project(base: &WebpackConfig, project: &ProjectConfig) -> Result<WebpackConfig> {
    let mut config = base.clone();
    for (extension, transform) in &project.transforms {
        config = build_rule(&config, extension, transform.clone())?;
    }
    let config = build_split_chunks(&config, &project.optimization);

    info!(
        rules = config.module.rules.len(),
        extensions = config.resolve.extensions.len(),
        "applied project transforms"
    );

    Ok(config)
}
