//! `gemclean render`

use crate::error::Result;
use gemclean_core::{BundleEngine, CommandEngine, ReleaseConfig};
use gemclean_manifest::{render_manifest, strip_sources};

/// The released manifest text for the project. Nothing on disk changes.
pub fn run_render(config: &ReleaseConfig) -> Result<String> {
    let engine = CommandEngine::from_config(config);
    let mut set = engine.parse_current_manifest()?;
    strip_sources(&mut set);
    Ok(render_manifest(&set))
}
