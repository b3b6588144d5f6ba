//! Wick - share one-time secrets from the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wick::cli::output;
use wick::cli::{execute, Cli};
use wick::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support. Diagnostics go
    // to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_env("WICK_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("wick=debug")
        } else {
            EnvFilter::new("wick=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::MissingUsername | Error::MissingKey => {
                Some("get an API key at https://onetimesecret.com/account")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
