//! funcsync CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use funcsync::commands::{run_sync, CommandContext};
use funcsync::{Cli, TracingSink};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> funcsync::Result<()> {
    let invocation = cli.invocation()?;
    let ctx = CommandContext::from(cli);

    let report = run_sync(&invocation, &ctx, &TracingSink)?;

    if ctx.dry_run {
        print!("{}", report.outcome.text);
    }
    eprintln!("{}", report.summary());

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
