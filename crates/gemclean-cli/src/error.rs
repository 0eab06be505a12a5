//! Error types for gemclean-cli

use gemclean_core::TransactionError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gemclean-core
    #[error(transparent)]
    Core(#[from] gemclean_core::Error),

    /// The released-bundle transaction failed
    #[error(transparent)]
    Transaction(#[from] TransactionError<std::io::Error>),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Logging could not be initialised
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}

impl CliError {
    /// Earlier failure hidden behind a restore failure, if any.
    pub fn suppressed(&self) -> Option<&str> {
        match self {
            Self::Transaction(TransactionError::Restore { suppressed, .. }) => suppressed.as_deref(),
            _ => None,
        }
    }
}
