//! `gemclean exec`

use crate::error::Result;
use gemclean_core::{CommandEngine, ReleaseConfig, ReleaseTransaction};
use std::process::{Command, ExitStatus};

/// Run `cmd` in the project root with the bundle in released form.
///
/// Returns the command's exit status; a command that cannot be started is
/// an error, after the files have been restored.
pub fn run_exec(config: &ReleaseConfig, cmd: &[String]) -> Result<ExitStatus> {
    let engine = CommandEngine::from_config(config);
    let (program, args) = match cmd.split_first() {
        Some(parts) => parts,
        None => return Ok(ExitStatus::default()),
    };

    let status = ReleaseTransaction::new(config).run(&engine, || {
        tracing::info!(command = %cmd.join(" "), "Running");
        Command::new(program)
            .args(args)
            .current_dir(&config.root)
            .status()
    })?;

    Ok(status)
}
