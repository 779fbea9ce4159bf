use std::path::{Path, PathBuf};

use loadout_config::{ConfigDiscovery, ConfigError, LoadoutConfig, load_layered};
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Project root: `--cwd` resolved against the current directory.
pub(crate) fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    let root = match cwd {
        Some(dir) => resolve_path(dir, &current),
        None => current,
    };

    if !root.is_dir() {
        return Err(CliError::FileNotFound(root));
    }
    Ok(root)
}

pub(crate) fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Load the layered build config for `args`, returning it with its root.
///
/// The CLI requires a config file; environment overrides only adjust it.
pub(crate) fn load_project(args: &ProjectArgs) -> Result<(PathBuf, LoadoutConfig)> {
    let root = project_root(args.cwd.as_deref())?;
    if ConfigDiscovery::new(&root).find().is_none() {
        return Err(ConfigError::NotFound.into());
    }
    debug!(root = %root.display(), profile = ?args.profile, "loading build config");
    let config = load_layered(&root, args.profile.as_deref())?;
    Ok((root, config))
}
