//! Command implementations for the loadout CLI.
//!
//! - [`print`] - Compose and print the bundler configuration
//! - [`check`] - Validate the build config
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod print;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use print::execute as print_execute;
