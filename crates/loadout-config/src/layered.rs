//! Layered loading: defaults, then the discovered file, then `LOADOUT_*`
//! environment variables.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Serialized},
    util::nest,
    value::Value as FigmentValue,
};
use serde_json::Value;
use tracing::debug;

use crate::config::LoadoutConfig;
use crate::discovery::ConfigDiscovery;
use crate::error::{ConfigError, Result};

/// Prefix of environment overrides.
///
/// Nested keys are separated by `__` and written in snake case, e.g.
/// `LOADOUT_PROJECT__OPTIMIZATION__EXTRACT_VENDOR=vendor`.
pub const ENV_PREFIX: &str = "LOADOUT_";

/// Load the build config under `root` with environment overrides applied,
/// then materialize `profile`.
///
/// A missing config file is not an error here: defaults plus environment
/// are enough to describe a project.
pub fn load_layered(root: impl AsRef<Path>, profile: Option<&str>) -> Result<LoadoutConfig> {
    let discovery = ConfigDiscovery::new(root);
    let file_value = match discovery.find() {
        Some(path) => Some(discovery.read_value(&path)?),
        None => {
            debug!(root = %discovery.root().display(), "no build config file, using defaults");
            None
        }
    };

    let mut figment = Figment::from(Serialized::defaults(LoadoutConfig::default()));
    if let Some(value) = &file_value {
        figment = figment.merge(Serialized::defaults(value));
    }
    for (path, value) in env_overrides() {
        debug!(key = %path, "applying environment override");
        figment = figment.merge(Serialized::defaults(nest(&path, value)));
    }

    let mut config: LoadoutConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        hint: Some(e.to_string()),
    })?;

    // figment dictionaries are sorted; rules must follow the file's order
    if let Some(value) = &file_value {
        config.reorder_transforms(
            &key_order(value.pointer("/project/transforms")),
            &key_order(value.get("transforms")),
        );
    }

    config.materialize_profile(profile)
}

/// `LOADOUT_*` variables as (camelCase key path, parsed value) pairs.
///
/// Paths are built here instead of through figment's env nesting, which
/// folds keys to lowercase and would lose `extractCommon`.
fn env_overrides() -> Vec<(String, FigmentValue)> {
    let mut overrides: Vec<_> = Env::prefixed(ENV_PREFIX)
        .iter()
        .filter_map(|(key, raw)| {
            let Ok(value) = raw.parse::<FigmentValue>();
            let path = env_key_path(key.as_str());
            (!path.is_empty()).then_some((path, value))
        })
        .collect();
    overrides.sort_by(|a, b| a.0.cmp(&b.0));
    overrides
}

/// `PROJECT__OPTIMIZATION__EXTRACT_COMMON` -> `project.optimization.extractCommon`
fn env_key_path(raw: &str) -> String {
    raw.to_ascii_lowercase()
        .split("__")
        .map(camel_case)
        .collect::<Vec<_>>()
        .join(".")
}

fn camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut upper = false;
    for c in segment.chars() {
        if c == '_' && !out.is_empty() {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn key_order(table: Option<&Value>) -> Vec<String> {
    match table {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
