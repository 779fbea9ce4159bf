//! loadout CLI - compose bundler configuration from a project build config.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `print` and `check` implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//!
//! stdout carries only the composed configuration, so `loadout print` can be
//! piped; logs and status messages go to stderr.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
