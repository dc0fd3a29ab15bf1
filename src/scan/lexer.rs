//! Lexical state machine shared by the span scanner
//!
//! The lexer walks a document byte by byte and only yields bytes that are
//! plain code: string and character literals, line comments and block
//! comments are consumed silently. Every delimiter this crate cares about is
//! ASCII, so scanning bytes never splits a UTF-8 sequence at a yielded
//! position.

use crate::lang::Dialect;

/// Where the lexer currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    /// Inside a literal opened by the given quote byte
    InString(u8),
    InLineComment,
    InBlockComment,
}

/// Iterator over the code bytes of a document starting at some offset.
///
/// Yields `(offset, byte)` for every byte outside literals and comments. The
/// newline that terminates a line comment is yielded as code.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: LexState,
    backtick_escapes: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(document: &'a str, start: usize, dialect: Dialect) -> Self {
        Self {
            bytes: document.as_bytes(),
            pos: start.min(document.len()),
            state: LexState::Normal,
            backtick_escapes: dialect.backtick_escapes(),
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn escapes_in(&self, quote: u8) -> bool {
        quote != b'`' || self.backtick_escapes
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(b) = self.peek(0) {
            match self.state {
                LexState::Normal => match (b, self.peek(1)) {
                    (b'/', Some(b'/')) => {
                        self.state = LexState::InLineComment;
                        self.pos += 2;
                    }
                    (b'/', Some(b'*')) => {
                        self.state = LexState::InBlockComment;
                        self.pos += 2;
                    }
                    (b'"' | b'\'' | b'`', _) => {
                        self.state = LexState::InString(b);
                        self.pos += 1;
                    }
                    _ => {
                        self.pos += 1;
                        return Some((self.pos - 1, b));
                    }
                },
                LexState::InString(quote) => {
                    if b == b'\\' && self.escapes_in(quote) {
                        // skip the escaped byte along with the backslash
                        self.pos += 2;
                    } else {
                        if b == quote {
                            self.state = LexState::Normal;
                        }
                        self.pos += 1;
                    }
                }
                LexState::InLineComment => {
                    self.pos += 1;
                    if b == b'\n' {
                        self.state = LexState::Normal;
                        return Some((self.pos - 1, b));
                    }
                }
                LexState::InBlockComment => {
                    if b == b'*' && self.peek(1) == Some(b'/') {
                        self.state = LexState::Normal;
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                    }
                }
            }
        }
        None
    }
}
