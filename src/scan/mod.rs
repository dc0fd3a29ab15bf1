//! Text scanning primitives
//!
//! Definition boundaries are found in two phases: a dialect detector matches
//! a header cheaply, then the span scanner walks the body with a small lexer
//! so that braces in literals and comments never disturb the count.

pub mod comments;
pub mod lexer;
pub mod span;

pub use comments::is_commented;
pub use lexer::Lexer;
pub use span::{extract_span, Span};
