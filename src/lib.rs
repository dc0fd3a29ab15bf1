//! funcsync: replace or append function definitions across source files
//!
//! This library locates function and method definitions in Go and
//! TypeScript / JavaScript text without a full parser, extracts each one as
//! an exact text span, and merges a list of definitions into another
//! document: same-keyed definitions are replaced in place, new ones are
//! appended, everything else is kept byte-for-byte.
//!
//! # Pipeline
//!
//! 1. a dialect detector matches candidate headers (`detectors`)
//! 2. commented-out candidates are dropped (`scan::comments`)
//! 3. each header is delimited by a literal- and comment-aware brace scan (`scan::span`)
//! 4. definitions are sorted and de-duplicated by offset (`extract`)
//! 5. the merge engine replaces or appends by key (`merge`)
//!
//! # Example
//!
//! ```
//! use funcsync::{extract_definitions, merge_text, Dialect};
//!
//! let source = "func Hello() {\n\tfmt.Println(\"new\")\n}\n";
//! let target = "package main\n\nfunc Hello() {\n\tfmt.Println(\"old\")\n}\n";
//!
//! let defs = extract_definitions(source, Dialect::Go);
//! let merged = merge_text(target, &defs, Dialect::Go);
//! assert!(merged.contains("\"new\""));
//! assert!(!merged.contains("\"old\""));
//! ```

pub mod cli;
pub mod commands;
pub mod detectors;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod extract;
pub mod lang;
pub mod merge;
pub mod scan;
pub mod schema;

// Re-export commonly used types
pub use cli::{Cli, Invocation, SourceSpec};
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, RecordingSink, TracingSink};
pub use error::{Result, SyncError};
pub use extract::{extract_definitions, extract_with, ExtractOptions};
pub use lang::Dialect;
pub use merge::{merge, merge_text, sync_documents, MergeOutcome};
pub use scan::{extract_span, is_commented, Span};
pub use schema::Definition;
