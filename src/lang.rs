//! Dialect detection from file paths and from raw content

use std::fmt;
use std::path::Path;

use crate::error::{Result, SyncError};

/// The two surface grammars definitions are recognized in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Brace-bodied `func` declarations with an optional receiver clause
    Go,
    /// Function declarations, arrow-bound function expressions and class methods
    TypeScript,
}

/// Substrings that hint at Go source
const GO_INDICATORS: &[&str] = &["func ", "package ", "import (", "type ", "var "];

/// Substrings that hint at TypeScript / JavaScript source
const TS_INDICATORS: &[&str] = &["function ", "const ", "export ", "interface ", "import "];

impl Dialect {
    /// Detect dialect from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| SyncError::UnsupportedExtension {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect dialect from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "go" => Ok(Self::Go),
            "ts" | "mts" | "cts" | "js" | "mjs" | "cjs" => Ok(Self::TypeScript),
            _ => Err(SyncError::UnsupportedExtension {
                extension: ext.to_string(),
            }),
        }
    }

    /// Guess the dialect of text that has no file name attached.
    ///
    /// Each indicator present in the text scores one point for its dialect.
    /// Go wins ties, including the case where nothing matched at all.
    pub fn classify(content: &str) -> Self {
        let score = |indicators: &[&str]| {
            indicators
                .iter()
                .filter(|indicator| content.contains(*indicator))
                .count()
        };

        let go_score = score(GO_INDICATORS);
        let ts_score = score(TS_INDICATORS);

        if go_score >= ts_score {
            Self::Go
        } else {
            Self::TypeScript
        }
    }

    /// Get the canonical name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "typescript",
        }
    }

    /// Whether a backslash escapes the next character inside a backtick literal
    pub(crate) fn backtick_escapes(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dialect_detection() {
        assert_eq!(Dialect::from_extension("go").unwrap(), Dialect::Go);
        assert_eq!(Dialect::from_extension("GO").unwrap(), Dialect::Go);
        assert_eq!(Dialect::from_extension("ts").unwrap(), Dialect::TypeScript);
        assert_eq!(Dialect::from_extension("js").unwrap(), Dialect::TypeScript);
        assert_eq!(Dialect::from_extension("mjs").unwrap(), Dialect::TypeScript);
    }

    #[test]
    fn test_dialect_from_path() {
        let path = PathBuf::from("internal/handlers/session.go");
        assert_eq!(Dialect::from_path(&path).unwrap(), Dialect::Go);

        let path = PathBuf::from("web/src/api.ts");
        assert_eq!(Dialect::from_path(&path).unwrap(), Dialect::TypeScript);
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(Dialect::from_extension("py").is_err());
        // JSX text is not a string literal, so apostrophes would derail the lexer
        assert!(Dialect::from_extension("tsx").is_err());
        assert!(Dialect::from_extension("jsx").is_err());
        assert!(Dialect::from_path(Path::new("Makefile")).is_err());
    }

    #[test]
    fn test_classify_go() {
        let src = "package main\n\nimport (\n\t\"fmt\"\n)\n\nfunc main() {}\n";
        assert_eq!(Dialect::classify(src), Dialect::Go);
    }

    #[test]
    fn test_classify_typescript() {
        let src = "import { x } from './x';\n\nexport function greet(): void {}\nconst a = 1;\n";
        assert_eq!(Dialect::classify(src), Dialect::TypeScript);
    }

    #[test]
    fn test_classify_tie_prefers_go() {
        assert_eq!(Dialect::classify(""), Dialect::Go);
        assert_eq!(Dialect::classify("hello world"), Dialect::Go);
        // one indicator each
        assert_eq!(Dialect::classify("type X\nconst y"), Dialect::Go);
    }
}
