//! Error types for configuration builders.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddonError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddonError {
    /// A builder argument was missing or had the wrong shape. Raised before
    /// any output is produced.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An untyped value could not be read as a configuration object.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AddonError {
    pub(crate) fn invalid_extension(raw: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("Invalid extension: {raw}"))
    }

    pub(crate) fn invalid_transform(raw: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("Invalid transform info: {raw}"))
    }
}
