//! Error types for funcsync

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::lang::Dialect;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SyncError>;

/// Everything that can go wrong while synchronizing definitions
#[derive(Debug, Error)]
pub enum SyncError {
    /// A header was matched but no body opener followed it
    #[error("no opening brace after header at offset {offset}")]
    NoOpeningDelimiter { offset: usize },

    /// The body scan ran off the end of the document
    #[error("unbalanced braces in definition starting at offset {offset}")]
    UnbalancedDelimiters { offset: usize },

    #[error("source is {source_dialect} but target is {target_dialect}; both documents must use the same dialect")]
    DialectMismatch {
        source_dialect: Dialect,
        target_dialect: Dialect,
    },

    #[error("cannot read target {}: {source}", path.display())]
    TargetUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read source {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("clipboard unavailable: {message}")]
    ClipboardUnavailable { message: String },

    #[error("clipboard is empty")]
    ClipboardEmpty,

    #[error("unsupported file extension: {extension}")]
    UnsupportedExtension { extension: String },

    #[error("{message}")]
    Usage { message: String },
}

impl SyncError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage { .. } => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message_is_shown_verbatim() {
        let usage = SyncError::Usage {
            message: "missing target path".to_string(),
        };
        assert_eq!(usage.to_string(), "missing target path");
    }

    #[test]
    fn test_dialect_mismatch_message() {
        let err = SyncError::DialectMismatch {
            source_dialect: Dialect::TypeScript,
            target_dialect: Dialect::Go,
        };
        assert_eq!(
            err.to_string(),
            "source is typescript but target is go; both documents must use the same dialect"
        );
    }
}
