//! Sync command handler - read both documents, merge, write the target

use std::path::{Path, PathBuf};

use crate::cli::{Invocation, SourceSpec};
use crate::commands::CommandContext;
use crate::diagnostics::DiagnosticSink;
use crate::document::{read_clipboard, read_source, read_target, write_document};
use crate::error::{Result, SyncError};
use crate::extract::extract_with;
use crate::lang::Dialect;
use crate::merge::{merge, MergeOutcome};

/// What a sync run did
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub source_label: String,
    pub target: PathBuf,
    pub dialect: Dialect,
    /// Definitions found in the source
    pub source_definitions: usize,
    pub target_was_absent: bool,
    pub outcome: MergeOutcome,
}

impl SyncReport {
    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "Synced {} {} definition(s) from {} into {}: {} replaced, {} appended, {} skipped",
            self.source_definitions,
            self.dialect,
            self.source_label,
            self.target.display(),
            self.outcome.replaced.len(),
            self.outcome.appended.len(),
            self.outcome.skipped.len(),
        )
    }
}

/// Run the sync command for a validated invocation
pub fn run_sync(
    invocation: &Invocation,
    ctx: &CommandContext,
    sink: &dyn DiagnosticSink,
) -> Result<SyncReport> {
    let target_dialect = Dialect::from_path(&invocation.target)?;

    let (source_text, source_dialect, source_label) = match &invocation.source {
        SourceSpec::Clipboard => {
            let text = read_clipboard()?;
            let dialect = ctx
                .dialect_override
                .unwrap_or_else(|| Dialect::classify(&text));
            tracing::info!(%dialect, "detected clipboard dialect");
            (text, dialect, "clipboard".to_string())
        }
        SourceSpec::File(path) => (
            read_source(path)?,
            Dialect::from_path(path)?,
            path.display().to_string(),
        ),
    };

    let target_doc = read_target(&invocation.target)?;
    let target_was_absent = target_doc.is_absent();
    if target_was_absent {
        tracing::info!(path = %invocation.target.display(), "target does not exist, starting from an empty document");
    }

    if source_dialect != target_dialect {
        return Err(SyncError::DialectMismatch {
            source_dialect,
            target_dialect,
        });
    }

    let source_defs = extract_with(&source_text, source_dialect, &ctx.extract, sink);
    tracing::debug!(count = source_defs.len(), "extracted source definitions");

    let outcome = merge(
        &target_doc.into_text(),
        &source_defs,
        target_dialect,
        &ctx.extract,
        sink,
    );

    if !ctx.dry_run {
        write_document(&invocation.target, &outcome.text)?;
    }

    Ok(SyncReport {
        source_label,
        target: invocation.target.clone(),
        dialect: target_dialect,
        source_definitions: source_defs.len(),
        target_was_absent,
        outcome,
    })
}

/// Convenience for file-to-file syncs
pub fn sync_files(
    source: &Path,
    target: &Path,
    ctx: &CommandContext,
    sink: &dyn DiagnosticSink,
) -> Result<SyncReport> {
    let invocation = Invocation {
        source: SourceSpec::File(source.to_path_buf()),
        target: target.to_path_buf(),
    };
    run_sync(&invocation, ctx, sink)
}
