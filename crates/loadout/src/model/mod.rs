//! Typed view of the bundler configuration object.
//!
//! Only the paths the builders write to are modelled. Everything else is kept
//! in flattened `extra` maps and serialized back unchanged, so a configuration
//! read from JSON survives a round trip through the builders.

mod rule;
mod split;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub use rule::{ModuleRule, Pattern, Rule, Step};
pub use split::{CacheGroup, MinSize, SplitChunksOptions};

use crate::error::{AddonError, Result};

/// Bundler configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebpackConfig {
    /// Module resolution settings
    #[serde(default)]
    pub resolve: Resolve,

    /// Module processing rules
    #[serde(default)]
    pub module: ModuleOptions,

    /// Optimization settings, including the split-chunks policy
    #[serde(default)]
    pub optimization: Optimization,

    /// Every other top-level key (entry, output, plugins, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolve {
    /// Extensions tried when an import omits one, with leading dot
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Rules in the order they were added
    #[serde(default)]
    pub rules: Vec<ModuleRule>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Optimization {
    /// Split-chunks policy in the shape the builders write. A policy of any
    /// other shape stays in `extra` under `splitChunks`.
    #[serde(
        rename = "splitChunks",
        skip_serializing_if = "Option::is_none"
    )]
    pub split_chunks: Option<SplitChunksOptions>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Optimization {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        let split_chunks = match extra.remove(SPLIT_CHUNKS) {
            Some(raw) => match serde_json::from_value::<SplitChunksOptions>(raw.clone()) {
                Ok(policy) => Some(policy),
                Err(_) => {
                    extra.insert(SPLIT_CHUNKS.to_string(), raw);
                    None
                }
            },
            None => None,
        };
        Ok(Self {
            split_chunks,
            extra,
        })
    }
}

impl Optimization {
    /// Replace the split-chunks policy, whatever shape it had before.
    pub fn set_split_chunks(&mut self, policy: SplitChunksOptions) {
        self.extra.remove(SPLIT_CHUNKS);
        self.split_chunks = Some(policy);
    }
}

const SPLIT_CHUNKS: &str = "splitChunks";

impl WebpackConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use loadout::WebpackConfig;
    /// use serde_json::json;
    ///
    /// let config = WebpackConfig::from_value(json!({
    ///     "entry": "./src/index.js",
    ///     "resolve": { "extensions": [".js"] }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.resolve.extensions, vec![".js".to_string()]);
    /// assert_eq!(config.extra["entry"], json!("./src/index.js"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| AddonError::InvalidConfig(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| AddonError::InvalidConfig(e.to_string()))
    }

    /// Whether `extension` (with leading dot) is already resolvable.
    pub fn resolves(&self, extension: &str) -> bool {
        self.resolve.extensions.iter().any(|e| e == extension)
    }
}
