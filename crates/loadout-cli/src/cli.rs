//! Command-line interface definition.
//!
//! - `loadout print` - Compose and print the bundler configuration
//! - `loadout check` - Validate the build config without printing

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// loadout - bundler rule chains and split-chunks policies from a build config
#[derive(Parser, Debug)]
#[command(
    name = "loadout",
    version,
    about = "Compose bundler loader rules and code-splitting options from a build config",
    long_about = "loadout reads a project build config (loadout.toml, loadout.json or the\n\
                  'loadout' field of package.json), appends one module rule per configured\n\
                  transform to a base bundler config, writes the split-chunks policy and\n\
                  prints the result as JSON.\n\n\
                  The JSON is meant to be loaded by a JS config module: rule `test` and\n\
                  `exclude` values are regex sources to wrap in `new RegExp(...)`, and a\n\
                  `minSize` of \"Infinity\" stands for the number `Infinity`."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the bundler configuration and print it as JSON
    ///
    /// Applies every transform of the build config, in declaration order,
    /// to the base config and writes the split-chunks policy.
    Print(PrintArgs),

    /// Validate the build config
    ///
    /// Loads the config with profile and environment overrides, checks it,
    /// and performs a dry composition.
    Check(CheckArgs),
}

/// Arguments shared by commands that load a build config
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory containing the build config
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Profile whose overrides are applied
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,
}

/// Arguments for the print command
#[derive(Args, Debug, Clone, Default)]
pub struct PrintArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Base bundler config JSON (overrides `base` from the build config)
    #[arg(short, long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
