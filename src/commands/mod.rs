//! Command handlers behind the CLI

pub mod sync;

pub use sync::{run_sync, sync_files, SyncReport};

use crate::cli::Cli;
use crate::extract::ExtractOptions;
use crate::lang::Dialect;

/// Settings shared by command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Dialect to assume for clipboard text instead of classifying it
    pub dialect_override: Option<Dialect>,
    /// Compute the merge without writing the target
    pub dry_run: bool,
    pub extract: ExtractOptions,
}

impl From<&Cli> for CommandContext {
    fn from(cli: &Cli) -> Self {
        Self {
            dialect_override: cli.dialect.map(Dialect::from),
            dry_run: cli.dry_run,
            extract: ExtractOptions {
                qualify_class_members: cli.qualify_class_members,
            },
        }
    }
}
