//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gemclean - run commands against the released form of a Gemfile
#[derive(Parser, Debug)]
#[command(name = "gemclean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Manifest path, relative to the current directory
    #[arg(long, global = true, env = "GEMCLEAN_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Lock file path, relative to the current directory
    #[arg(long, global = true, env = "GEMCLEAN_LOCKFILE")]
    pub lockfile: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a command with the bundle in released form
    ///
    /// The Gemfile and its lock file are restored afterwards, whatever the
    /// command does. gemclean exits with the command's status.
    ///
    /// Examples:
    ///   gemclean exec -- bundle exec rspec
    ///   gemclean exec -- gem build mygem.gemspec
    Exec {
        /// Program and arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        cmd: Vec<String>,
    },

    /// Print the released manifest without touching any files
    Render,

    /// List sources and options the released manifest would drop
    Check,
}
