//! Code-splitting ("common chunks") policy.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::{ALL_CHUNKS, chunks};
use crate::model::{CacheGroup, MinSize, SplitChunksOptions, WebpackConfig};

/// Optimization switches supplied by the project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
    /// Extract code shared between entries into the common chunk
    #[serde(default)]
    pub extract_common: bool,

    /// Name of a dedicated vendor chunk; `null`, `false` and `""` disable it
    #[serde(
        default,
        deserialize_with = "vendor_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub extract_vendor: Option<String>,
}

fn vendor_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(name) if name.is_empty() => Ok(None),
        Value::String(name) => Ok(Some(name)),
        other => Err(serde::de::Error::custom(format!(
            "extractVendor must be a chunk name or false, got {other}"
        ))),
    }
}

/// Write the split-chunks policy for `optimization` into a copy of `config`.
///
/// `optimization.splitChunks` is replaced wholesale. A vendor cache group is
/// only split by its explicit grouping, never by size; without
/// `extract_common` the common chunk itself is disabled the same way.
///
/// # Example
///
/// ```
/// use loadout::{build_split_chunks, MinSize, OptimizationOptions, WebpackConfig};
///
/// let options = OptimizationOptions { extract_common: false, extract_vendor: Some("vendor".into()) };
/// let config = build_split_chunks(&WebpackConfig::default(), &options);
/// let split = config.optimization.split_chunks.unwrap();
///
/// assert_eq!(split.min_size, Some(MinSize::Infinite));
/// assert_eq!(split.cache_groups["vendor"].min_size, MinSize::Infinite);
/// ```
pub fn build_split_chunks(
    config: &WebpackConfig,
    optimization: &OptimizationOptions,
) -> WebpackConfig {
    let mut cache_groups = IndexMap::new();
    if let Some(vendor) = &optimization.extract_vendor {
        cache_groups.insert(
            vendor.clone(),
            CacheGroup {
                name: vendor.clone(),
                chunks: ALL_CHUNKS.to_string(),
                min_size: MinSize::Infinite,
            },
        );
    }

    let policy = SplitChunksOptions {
        chunks: ALL_CHUNKS.to_string(),
        name: chunks::COMMON.to_string(),
        min_size: (!optimization.extract_common).then_some(MinSize::Infinite),
        cache_groups,
    };

    debug!(
        extract_common = optimization.extract_common,
        vendor = optimization.extract_vendor.as_deref().unwrap_or("-"),
        "writing split-chunks policy"
    );

    let mut next = config.clone();
    next.optimization.set_split_chunks(policy);
    next
}
