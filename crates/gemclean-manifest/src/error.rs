//! Error types for gemclean-manifest

/// Result type for gemclean-manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Errors raised while reading a manifest
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    /// Malformed token or argument list
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A statement outside the declarative subset we understand
    #[error("Unsupported statement on line {line}: {statement}")]
    Unsupported { line: usize, statement: String },

    /// `end` without an open block, or a block left open at end of input
    #[error("Unbalanced block on line {line}")]
    UnbalancedBlock { line: usize },
}

impl ManifestError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// The 1-based line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::Syntax { line, .. }
            | Self::Unsupported { line, .. }
            | Self::UnbalancedBlock { line } => *line,
        }
    }
}
