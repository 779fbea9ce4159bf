//! loadout CLI - compose bundler configuration from a project build config.
//!
//! This is the main entry point for the loadout CLI. It handles command-line argument
//! parsing, logging initialization, and command dispatch.

use clap::Parser;
use loadout_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
