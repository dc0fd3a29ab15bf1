//! Delimiter-balanced span extraction
//!
//! Given the offset of a definition header, find the brace that opens its
//! body and the brace that closes it. Braces inside string, character and
//! template literals or inside comments are never counted.

use crate::error::{Result, SyncError};
use crate::lang::Dialect;
use crate::scan::lexer::Lexer;

/// A located definition span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// `document[start..end]`
    pub text: &'a str,
    pub start: usize,
    /// One past the closing brace
    pub end: usize,
}

/// Tracks whether a newline inside the header still belongs to it
#[derive(Debug, Default)]
struct HeaderState {
    seen_equals: bool,
    paren_depth: usize,
    /// Last non-whitespace code byte on the current line
    line_tail: Option<u8>,
}

impl HeaderState {
    fn feed(&mut self, b: u8) {
        match b {
            b'=' => self.seen_equals = true,
            b'(' => self.paren_depth += 1,
            b')' => self.paren_depth = self.paren_depth.saturating_sub(1),
            _ => {}
        }
        if !b.is_ascii_whitespace() {
            self.line_tail = Some(b);
        }
    }

    /// Braces inside the parameter list belong to parameter types or patterns
    fn opens_body(&self, b: u8) -> bool {
        b == b'{' && self.paren_depth == 0
    }

    /// Called on a newline: may the header continue on the next line?
    fn continues(&mut self) -> bool {
        let ok = self.seen_equals
            || self.paren_depth > 0
            || matches!(self.line_tail, Some(b',') | Some(b'('));
        self.line_tail = None;
        ok
    }
}

/// Extract the exact text of the definition whose header starts at `start`.
///
/// The body opens at the first `{` outside the parameter list. Fails with
/// [`SyncError::NoOpeningDelimiter`] when a line break ends the header before
/// that brace shows up, and with
/// [`SyncError::UnbalancedDelimiters`] when the document ends before the body
/// closes.
pub fn extract_span(document: &str, start: usize, dialect: Dialect) -> Result<Span<'_>> {
    let mut lexer = Lexer::new(document, start, dialect);
    let mut header = HeaderState::default();

    let mut opened = false;
    for (_, b) in lexer.by_ref() {
        match b {
            b'{' if header.opens_body(b) => {
                opened = true;
                break;
            }
            b'\n' => {
                if !header.continues() {
                    return Err(SyncError::NoOpeningDelimiter { offset: start });
                }
            }
            _ => header.feed(b),
        }
    }
    if !opened {
        return Err(SyncError::NoOpeningDelimiter { offset: start });
    }

    let mut depth = 1usize;
    for (pos, b) in lexer {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let end = pos + 1;
                    return Ok(Span {
                        text: &document[start..end],
                        start,
                        end,
                    });
                }
            }
            _ => {}
        }
    }

    Err(SyncError::UnbalancedDelimiters { offset: start })
}
