//! Check command implementation.
//!
//! Validates the build config without printing the composed configuration.

use loadout::apply_project;
use loadout_config::validate_fs;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the build config with environment and profile overrides
/// 2. Validate the schema and that `base` exists
/// 3. Compose the configuration without writing it
///
/// # Errors
///
/// Returns the first failure; nothing is reported as passed after it.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking build config...");

    let (root, config) = utils::load_project(&args.project)?;
    validate_fs(&config, &root)?;

    if config.project.transforms.is_empty() {
        ui::warning("No transforms configured; only the split-chunks policy will be written");
    }

    let base = config.load_base(&root)?;
    let composed = apply_project(&base, &config.project)?;

    ui::success(&format!(
        "{} transform(s) compose into {} rule(s)",
        config.project.transforms.len(),
        composed.module.rules.len()
    ));
    Ok(())
}
