//! Print command implementation.

use std::fs;

use loadout::apply_project;
use loadout_config::validate_schema;
use tracing::info;

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the print command.
///
/// 1. Load the build config (file, environment, profile)
/// 2. Validate its schema
/// 3. Read the base bundler config (`--base`, then `base` from the config)
/// 4. Apply every transform and the split-chunks policy
/// 5. Write the JSON to stdout or `--output`
pub fn execute(args: PrintArgs) -> Result<()> {
    let (root, mut config) = utils::load_project(&args.project)?;
    validate_schema(&config)?;

    if let Some(base) = &args.base {
        let path = utils::resolve_path(base, &std::env::current_dir()?);
        if !path.exists() {
            return Err(CliError::FileNotFound(path));
        }
        config.base = Some(path);
    }

    let base = config.load_base(&root)?;
    let composed = apply_project(&base, &config.project)?;
    let value = composed.to_value()?;

    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };

    match &args.output {
        Some(path) => {
            let path = utils::resolve_path(path, &std::env::current_dir()?);
            fs::write(&path, format!("{rendered}\n"))?;
            info!(path = %path.display(), "wrote configuration");
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
