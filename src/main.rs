#![deny(clippy::all, clippy::pedantic)]
//! Binary entry point: parse args, set up logging, dispatch, map errors to
//! exit codes.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use topocli::cli::{Cli, OutputCtx, write_error};
use topocli::commands;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let ctx = OutputCtx::new(cli.address.as_str(), cli.no_headers, cli.verbose);

    match commands::dispatch(&cli.command, &ctx).await {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Logs go to stderr so stdout carries only tabular data. `RUST_LOG` wins
/// when set; otherwise `--debug` selects the debug level and the default
/// keeps errors only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
