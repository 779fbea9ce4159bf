pub mod config;
pub mod discovery;
pub mod error;
pub mod layered;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;

// Re-export discovery, layering and validation
pub use discovery::ConfigDiscovery;
pub use layered::{ENV_PREFIX, load_layered};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
