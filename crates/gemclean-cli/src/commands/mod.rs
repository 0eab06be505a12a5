//! Command implementations

mod check;
mod exec;
mod render;

pub use check::run_check;
pub use exec::run_exec;
pub use render::run_render;

use crate::error::Result;
use gemclean_core::ReleaseConfig;
use std::path::{Path, PathBuf};

/// Project config from `root`, with command-line path overrides applied.
pub fn load_config(root: &Path, manifest: Option<PathBuf>, lockfile: Option<PathBuf>) -> Result<ReleaseConfig> {
    let mut config = ReleaseConfig::load(root)?;
    if let Some(manifest) = manifest {
        config = config.with_manifest(manifest);
    }
    if let Some(lockfile) = lockfile {
        config = config.with_lockfile(lockfile);
    }
    Ok(config)
}
