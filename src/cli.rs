//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{Result, SyncError};
use crate::lang::Dialect;

/// Replace or append Go / TypeScript functions in a target file
#[derive(Parser, Debug)]
#[command(name = "funcsync")]
#[command(about = "Synchronize function and method definitions into a target file")]
#[command(
    after_help = "Examples:\n  funcsync target.go               source from clipboard\n  funcsync -c target.go            source from clipboard\n  funcsync source.go target.go     file to file\n  funcsync -- source.ts target.ts  file to file"
)]
#[command(version)]
pub struct Cli {
    /// TARGET, or SOURCE followed by TARGET
    #[arg(value_name = "PATHS", num_args = 0..)]
    pub paths: Vec<PathBuf>,

    /// Read the source from the clipboard
    #[arg(short, long)]
    pub clipboard: bool,

    /// Dialect of clipboard text instead of guessing from its content
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Print the merged document instead of writing the target
    #[arg(long)]
    pub dry_run: bool,

    /// Key TypeScript class members by `Class.method` instead of `method`
    #[arg(long, env = "FUNCSYNC_QUALIFY_CLASS_MEMBERS")]
    pub qualify_class_members: bool,

    /// Show debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

/// Dialect names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    Go,
    #[value(aliases = ["ts", "javascript", "js"])]
    Typescript,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Go => Dialect::Go,
            DialectArg::Typescript => Dialect::TypeScript,
        }
    }
}

/// Where the source document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Clipboard,
    File(PathBuf),
}

/// A validated command-line shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: SourceSpec,
    pub target: PathBuf,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the positional paths into a source and a target.
    ///
    /// One path is the target with the clipboard as source (`-c` just makes
    /// that explicit); two paths are source and target. Anything else is a
    /// usage error.
    pub fn invocation(&self) -> Result<Invocation> {
        match (self.paths.as_slice(), self.clipboard) {
            ([target], _) => Ok(Invocation {
                source: SourceSpec::Clipboard,
                target: target.clone(),
            }),
            ([source, target], false) => Ok(Invocation {
                source: SourceSpec::File(source.clone()),
                target: target.clone(),
            }),
            ([_, _], true) => Err(SyncError::Usage {
                message: "--clipboard takes exactly one path (the target)".to_string(),
            }),
            ([], _) => Err(SyncError::Usage {
                message: "missing target path".to_string(),
            }),
            _ => Err(SyncError::Usage {
                message: format!("expected one or two paths, got {}", self.paths.len()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> Result<Invocation> {
        let argv = std::iter::once("funcsync").chain(args.iter().copied());
        Cli::try_parse_from(argv)
            .map_err(|e| SyncError::Usage {
                message: e.to_string(),
            })?
            .invocation()
    }

    #[test]
    fn test_target_only_reads_clipboard() {
        assert_eq!(
            invocation(&["target.go"]).unwrap(),
            Invocation {
                source: SourceSpec::Clipboard,
                target: PathBuf::from("target.go"),
            }
        );
    }

    #[test]
    fn test_explicit_clipboard_flag() {
        for flag in ["-c", "--clipboard"] {
            let inv = invocation(&[flag, "target.go"]).unwrap();
            assert_eq!(inv.source, SourceSpec::Clipboard);
            assert_eq!(inv.target, PathBuf::from("target.go"));
        }
    }

    #[test]
    fn test_source_and_target() {
        let inv = invocation(&["source.go", "target.go"]).unwrap();
        assert_eq!(inv.source, SourceSpec::File(PathBuf::from("source.go")));
        assert_eq!(inv.target, PathBuf::from("target.go"));
    }

    #[test]
    fn test_separator() {
        let inv = invocation(&["--", "target.go"]).unwrap();
        assert_eq!(inv.source, SourceSpec::Clipboard);

        let inv = invocation(&["--", "source.go", "target.go"]).unwrap();
        assert_eq!(inv.source, SourceSpec::File(PathBuf::from("source.go")));
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(invocation(&[]).is_err());
        assert!(invocation(&["--"]).is_err());
        assert!(invocation(&["--", "s.go", "t.go", "x.go"]).is_err());
        assert!(invocation(&["s.go", "t.go", "x.go", "--", "target.go"]).is_err());
        assert!(invocation(&["-c", "s.go", "t.go"]).is_err());
    }

    #[test]
    fn test_dialect_argument() {
        let cli = Cli::try_parse_from(["funcsync", "--dialect", "ts", "t.ts"]).unwrap();
        assert_eq!(cli.dialect.map(Dialect::from), Some(Dialect::TypeScript));
    }
}
