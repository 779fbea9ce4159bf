//! Transform descriptors as supplied by callers.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::transforms;
use crate::error::{AddonError, Result};

/// Recognized transformer kinds, plus an escape hatch for arbitrary loaders
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Css,
    Less,
    Sass,
    Stylus,
    Babel,
    Jsx,
    Ts,
    Tsx,
    Flow,
    File,
    /// Any other loader, named literally
    Other(String),
}

impl TransformKind {
    pub fn parse(name: &str) -> Self {
        match name {
            transforms::CSS => Self::Css,
            transforms::LESS => Self::Less,
            transforms::SASS => Self::Sass,
            transforms::STYLUS => Self::Stylus,
            transforms::BABEL => Self::Babel,
            transforms::JSX => Self::Jsx,
            transforms::TS => Self::Ts,
            transforms::TSX => Self::Tsx,
            transforms::FLOW => Self::Flow,
            transforms::FILE => Self::File,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Css => transforms::CSS,
            Self::Less => transforms::LESS,
            Self::Sass => transforms::SASS,
            Self::Stylus => transforms::STYLUS,
            Self::Babel => transforms::BABEL,
            Self::Jsx => transforms::JSX,
            Self::Ts => transforms::TS,
            Self::Tsx => transforms::TSX,
            Self::Flow => transforms::FLOW,
            Self::File => transforms::FILE,
            Self::Other(name) => name,
        }
    }

    /// Kinds whose sources become resolvable without an explicit extension.
    pub fn registers_extension(&self) -> bool {
        matches!(
            self,
            Self::Babel | Self::Jsx | Self::Ts | Self::Tsx | Self::Flow
        )
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TransformKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// A transformer kind together with its free-form options.
///
/// Accepts either the bare kind string or a `{ transformer, config }` record:
///
/// ```
/// use loadout::{Transform, TransformKind};
/// use serde_json::json;
///
/// let short = Transform::from_value(&json!("less")).unwrap();
/// let long = Transform::from_value(&json!({ "transformer": "less" })).unwrap();
/// assert_eq!(short, long);
/// assert_eq!(short.transformer, TransformKind::Less);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub transformer: TransformKind,
    pub config: Option<Value>,
}

impl Transform {
    pub fn new(transformer: impl Into<TransformKind>) -> Self {
        Self {
            transformer: transformer.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Normalize an untyped descriptor.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the value is neither a non-empty string nor an
    /// object carrying a non-empty string `transformer`.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) if !name.is_empty() => Ok(Self::new(name.as_str())),
            Value::Object(map) => match map.get("transformer") {
                Some(Value::String(name)) if !name.is_empty() => Ok(Self {
                    transformer: TransformKind::parse(name),
                    config: map.get("config").filter(|c| !c.is_null()).cloned(),
                }),
                _ => Err(AddonError::invalid_transform(value)),
            },
            _ => Err(AddonError::invalid_transform(value)),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match &self.transformer {
            TransformKind::Other(name) if name.is_empty() => {
                Err(AddonError::invalid_transform(format!("{:?}", name)))
            }
            _ => Ok(()),
        }
    }

    /// `config.options`, the part of the descriptor merged into component-syntax presets.
    pub(crate) fn nested_options(&self) -> Option<&Value> {
        self.config.as_ref().and_then(|c| c.get("options"))
    }
}

impl From<&str> for Transform {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<TransformKind> for Transform {
    fn from(kind: TransformKind) -> Self {
        Self::new(kind)
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = if self.config.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Transform", fields)?;
        state.serialize_field("transformer", self.transformer.as_str())?;
        if let Some(config) = &self.config {
            state.serialize_field("config", config)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Transform::from_value(&value).map_err(serde::de::Error::custom)
    }
}
