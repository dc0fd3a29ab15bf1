//! Document source and sink
//!
//! Reads the two text blocks the merge works on and writes the result back.
//! Files are normalized to `\n` line endings on the way in and out.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SyncError};

/// Outcome of reading a target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDocument {
    /// The file exists and was read
    Present(String),
    /// The file does not exist yet
    Absent,
}

impl TargetDocument {
    /// Text to merge into; an absent target is an empty document
    pub fn into_text(self) -> String {
        match self {
            Self::Present(text) => text,
            Self::Absent => String::new(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Read the source document from a file
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(|text| normalize_line_endings(&text))
        .map_err(|source| SyncError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the target document, distinguishing a missing file from a failed read
pub fn read_target(path: &Path) -> Result<TargetDocument> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(TargetDocument::Present(normalize_line_endings(&text))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(TargetDocument::Absent),
        Err(source) => Err(SyncError::TargetUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read the source document from the system clipboard
pub fn read_clipboard() -> Result<String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| SyncError::ClipboardUnavailable {
            message: e.to_string(),
        })?;

    let text = match clipboard.get_text() {
        Ok(text) => text,
        Err(arboard::Error::ContentNotAvailable) => return Err(SyncError::ClipboardEmpty),
        Err(e) => {
            return Err(SyncError::ClipboardUnavailable {
                message: e.to_string(),
            })
        }
    };

    check_clipboard_text(text)
}

fn check_clipboard_text(text: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(SyncError::ClipboardEmpty);
    }
    Ok(normalize_line_endings(&text))
}

/// Write `content` to `path` with `\n` line endings and exactly one trailing
/// newline, or as an empty file when there is nothing but whitespace lines.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, finalize(content)).map_err(|source| SyncError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize line endings and settle on exactly one trailing newline
pub fn finalize(content: &str) -> String {
    let normalized = normalize_line_endings(content);
    let body = normalized.trim_end_matches('\n');
    if body.is_empty() {
        String::new()
    } else {
        format!("{}\n", body)
    }
}
