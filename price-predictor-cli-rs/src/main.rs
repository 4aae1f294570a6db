//! price-predictor: property price estimates from the command line.
//!
//! Logs go to stderr so stdout only carries results.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use price_predictor_cli::Cli;

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "price_predictor=info,price_predictor_cli=info,prediction_sdk=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads PREDICTOR_* variables
    dotenv::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "price-predictor starting");

    match cli.run(&mut std::io::stdout()).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
