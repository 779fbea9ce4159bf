use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{AddonError, Result};

/// File-name pattern used by `test` and `exclude`.
///
/// Serialized as the regular expression source, e.g. `\.js$`.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self)
            .map_err(|e| AddonError::InvalidConfig(format!("invalid pattern `{source}`: {e}")))
    }

    /// Pattern matching file names ending in `.<extension>`.
    ///
    /// The extension is spliced in as regex source, so `jsx?` or `(js|mjs)`
    /// cover several extensions with one rule.
    pub fn for_extension(extension: &str) -> Result<Self> {
        Regex::new(&format!(r"\.{extension}$"))
            .map(Self)
            .map_err(|_| AddonError::invalid_extension(format!("{extension:?}")))
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// One module rule: files matching `test` run through `use`, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub test: Pattern,

    #[serde(rename = "use")]
    pub steps: Vec<Step>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,
}

impl Rule {
    /// Whether the bundler would apply this rule to `path`.
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.is_match(path) && !self.exclude.as_ref().is_some_and(|p| p.is_match(path))
    }

    /// Loader identifiers in chain order.
    pub fn loaders(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.loader.as_str()).collect()
    }
}

/// An entry of `module.rules`.
///
/// Rules read from an existing configuration are kept verbatim: they may use
/// `loader` shorthands, `oneOf` blocks or JavaScript-only regex syntax, and
/// are written back exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleRule {
    /// Appended by a builder
    Built(Rule),
    /// Carried over from the input configuration
    Opaque(Value),
}

impl ModuleRule {
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Self::Built(rule) => Some(rule),
            Self::Opaque(_) => None,
        }
    }

    /// Source of the `test` condition, when it is a single pattern.
    pub fn test_source(&self) -> Option<&str> {
        match self {
            Self::Built(rule) => Some(rule.test.as_str()),
            Self::Opaque(value) => value.get("test").and_then(Value::as_str),
        }
    }

    /// Loader identifiers in chain order, from `use` or the `loader` shorthand.
    pub fn loaders(&self) -> Vec<&str> {
        let value = match self {
            Self::Built(rule) => return rule.loaders(),
            Self::Opaque(value) => value,
        };

        fn loader_of(entry: &Value) -> Option<&str> {
            match entry {
                Value::String(name) => Some(name.as_str()),
                Value::Object(map) => map.get("loader").and_then(Value::as_str),
                _ => None,
            }
        }

        match value.get("use").or_else(|| value.get("loader")) {
            Some(Value::Array(entries)) => entries.iter().filter_map(loader_of).collect(),
            Some(entry) => loader_of(entry).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

impl From<Rule> for ModuleRule {
    fn from(rule: Rule) -> Self {
        Self::Built(rule)
    }
}

impl<'de> Deserialize<'de> for ModuleRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::Opaque)
    }
}

/// A single loader invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Step {
    pub fn new(loader: impl Into<String>, options: Option<Value>) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}
