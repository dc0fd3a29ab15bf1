//! Merge engine
//!
//! Replaces target definitions that share a key with a source definition and
//! appends the source definitions the target does not have. Everything that
//! is not a matched definition is left byte-for-byte where it was.
//!
//! The target is extracted once up front. After that the engine only does
//! substring search-and-replace on the evolving buffer and string
//! concatenation; it never re-extracts mid-merge.

use std::collections::{HashMap, HashSet};

use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::extract::{extract_with, ExtractOptions};
use crate::lang::Dialect;
use crate::scan::is_commented;
use crate::schema::Definition;

/// Result of a merge, with the keys grouped by what happened to them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged document
    pub text: String,
    /// Keys whose target definition was replaced, in source order
    pub replaced: Vec<String>,
    /// Keys appended to the end of the document, in source order
    pub appended: Vec<String>,
    /// Keys whose recorded target text could no longer be found
    pub skipped: Vec<String>,
}

/// Merge `source_defs` into `target` with default options, discarding diagnostics
pub fn merge_text(target: &str, source_defs: &[Definition], dialect: Dialect) -> String {
    merge(target, source_defs, dialect, &ExtractOptions::default(), &NullSink).text
}

/// Merge `source_defs` into the `target` document.
///
/// Target definitions are keyed with [`Definition::key`]; when the target
/// repeats a key the last occurrence wins. For each source definition in
/// order, a matching key replaces the first uncommented occurrence of the
/// target definition's text in the current buffer; a key unknown to the
/// target is queued and appended at the end.
pub fn merge(
    target: &str,
    source_defs: &[Definition],
    dialect: Dialect,
    options: &ExtractOptions,
    sink: &dyn DiagnosticSink,
) -> MergeOutcome {
    let target_defs = extract_with(target, dialect, options, sink);

    let mut by_key: HashMap<String, &Definition> = HashMap::with_capacity(target_defs.len());
    for def in &target_defs {
        let key = def.key();
        if by_key.insert(key.clone(), def).is_some() {
            sink.report(Diagnostic::DuplicateTargetKey { key });
        }
    }

    let mut outcome = MergeOutcome {
        text: target.to_string(),
        ..Default::default()
    };
    let mut processed: HashSet<String> = HashSet::new();
    let mut queued: Vec<&Definition> = Vec::new();

    for source_def in source_defs {
        let key = source_def.key();
        if !processed.insert(key.clone()) {
            sink.report(Diagnostic::DuplicateSourceKey { key });
            continue;
        }

        let Some(target_def) = by_key.get(&key) else {
            outcome.appended.push(key);
            queued.push(source_def);
            continue;
        };

        match find_uncommented(&outcome.text, &target_def.text) {
            Some(pos) => {
                let end = pos + target_def.text.len();
                outcome.text.replace_range(pos..end, &source_def.text);
                outcome.replaced.push(key);
            }
            None => {
                sink.report(Diagnostic::ReplacementNotFound { key: key.clone() });
                outcome.skipped.push(key);
            }
        }
    }

    append_definitions(&mut outcome.text, &queued);
    outcome
}

/// Extract definitions from `source` and merge them into `target`
pub fn sync_documents(
    source: &str,
    target: &str,
    dialect: Dialect,
    options: &ExtractOptions,
    sink: &dyn DiagnosticSink,
) -> MergeOutcome {
    let source_defs = extract_with(source, dialect, options, sink);
    merge(target, &source_defs, dialect, options, sink)
}

/// First occurrence of `needle` in `haystack` that does not start inside a comment
fn find_uncommented(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .match_indices(needle)
        .map(|(pos, _)| pos)
        .find(|&pos| !is_commented(haystack, pos))
}

/// Append definitions: one newline after existing content, a blank line
/// between definitions, one trailing newline.
fn append_definitions(buffer: &mut String, defs: &[&Definition]) {
    if defs.is_empty() {
        return;
    }

    if !buffer.is_empty() {
        while buffer.ends_with('\n') {
            buffer.pop();
        }
        buffer.push('\n');
    }

    for (i, def) in defs.iter().enumerate() {
        if i > 0 {
            buffer.push_str("\n\n");
        }
        buffer.push_str(&def.text);
    }
    buffer.push('\n');
}
