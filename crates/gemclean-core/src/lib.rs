//! Released-bundle transaction
//!
//! Temporarily rewrites a project's Gemfile into its released form (no path,
//! git or alternate-registry sources; only whitelisted options), regenerates
//! the lock file through a [`BundleEngine`], runs an operation, and restores
//! both files byte-for-byte afterwards.
//!
//! - [`config`]: `ReleaseConfig` and config file loading
//! - [`engine`]: the `BundleEngine` collaborator and `CommandEngine`
//! - [`transaction`]: `ReleaseTransaction`

pub mod config;
pub mod engine;
pub mod error;
pub mod transaction;

pub use config::{CONFIG_FILES, ReleaseConfig, default_lock_path};
pub use engine::{BundleEngine, CommandEngine, InstallOptions};
pub use error::{Error, Result, TransactionError};
pub use transaction::{ReleaseTransaction, Stage, in_released_bundle};
