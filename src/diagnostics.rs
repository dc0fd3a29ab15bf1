//! Diagnostics sink handed to the extraction and merge passes
//!
//! The core never logs through a global. Callers pass a sink: the binary uses
//! [`TracingSink`], tests use [`NullSink`] or [`RecordingSink`].

use std::cell::RefCell;

/// A recoverable condition noticed during extraction or merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A header matched but its body could not be delimited
    CandidateSkipped {
        name: String,
        offset: usize,
        reason: String,
    },
    /// The recorded target text no longer occurs in the merge buffer
    ReplacementNotFound { key: String },
    /// The source list names the same key more than once
    DuplicateSourceKey { key: String },
    /// The target document defines the same key more than once
    DuplicateTargetKey { key: String },
}

/// Receiver for [`Diagnostic`] events
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::CandidateSkipped {
                name,
                offset,
                reason,
            } => {
                tracing::debug!(%name, offset, %reason, "skipping definition candidate");
            }
            Diagnostic::ReplacementNotFound { key } => {
                tracing::warn!(%key, "target definition text not found in merge buffer, replacement skipped");
            }
            Diagnostic::DuplicateSourceKey { key } => {
                tracing::warn!(%key, "source defines key more than once, later occurrence ignored");
            }
            Diagnostic::DuplicateTargetKey { key } => {
                tracing::warn!(%key, "target defines key more than once, last occurrence wins");
            }
        }
    }
}

/// Discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps every diagnostic for later inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.events.borrow_mut().push(diagnostic);
    }
}
