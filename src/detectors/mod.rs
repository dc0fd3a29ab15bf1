//! Dialect-specific header detectors
//!
//! A detector scans a whole document for text that looks like the start of
//! a function or method header and reports `(name, owner, start)` triples.
//! Detectors never look at bodies; the span scanner does that.
//!
//! - `go`: `func` declarations with optional receiver
//! - `javascript`: declared functions, arrow bindings and class members

pub mod go;
pub mod javascript;

use crate::extract::ExtractOptions;
use crate::lang::Dialect;

/// A header match that has not been checked against comments or delimited yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCandidate {
    pub name: String,
    pub owner: Option<String>,
    /// Offset of the first header character
    pub start: usize,
}

/// Run the detector for `dialect` over `source`
pub fn find_headers(source: &str, dialect: Dialect, options: &ExtractOptions) -> Vec<HeaderCandidate> {
    match dialect {
        Dialect::Go => go::find_headers(source),
        Dialect::TypeScript => javascript::find_headers(source, options.qualify_class_members),
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
