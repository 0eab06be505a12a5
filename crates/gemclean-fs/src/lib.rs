//! Filesystem layer for gemclean
//!
//! Provides byte-exact snapshots of the manifest/lock file pair, atomic
//! whole-file writes, checksums and format-agnostic config loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod snapshot;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use snapshot::{CapturedFile, FileSnapshot};
