//! gemclean CLI
//!
//! Runs commands against the released form of a project's Gemfile and
//! restores the original manifest and lock file afterwards.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use cli::{Cli, Commands};
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if let Some(suppressed) = e.suppressed() {
                eprintln!("{}: earlier failure: {}", "note".yellow().bold(), suppressed);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let cwd = std::env::current_dir()?;
    let config = commands::load_config(&cwd, cli.manifest, cli.lockfile)?;

    match cli.command {
        Commands::Exec { cmd } => {
            let status = commands::run_exec(&config, &cmd)?;
            Ok(exit_code(status.code()))
        }
        Commands::Render => {
            print!("{}", commands::run_render(&config)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            commands::run_check(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Exit code mirroring a child status; signals map to 1.
fn exit_code(code: Option<i32>) -> ExitCode {
    match code.map(u8::try_from) {
        Some(Ok(code)) => ExitCode::from(code),
        _ => ExitCode::FAILURE,
    }
}
