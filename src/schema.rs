//! Extracted definition value type

use std::fmt;

/// One function or method definition located in a document.
///
/// Definitions are produced fresh by every extraction and never mutated;
/// merging builds a new document instead of editing these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Identifier of the function or method
    pub name: String,
    /// Receiver type (Go) or owning class (TypeScript, when qualified)
    pub owner: Option<String>,
    /// Exact source text from the first header character to the closing brace
    pub text: String,
    /// Byte offset of the header in the document it was extracted from
    pub start_offset: usize,
}

impl Definition {
    /// Key used to match definitions across documents.
    ///
    /// `owner.name` when an owner is present, otherwise the bare name.
    pub fn key(&self) -> String {
        match self.owner.as_deref() {
            Some(owner) if !owner.is_empty() => format!("{}.{}", owner, self.name),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.key(), self.start_offset)
    }
}
