#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use std::process;

use clap::Parser;

use crate::config::Cli;

/// Tracing target for CLI lifecycle events.
pub const TRACING_TARGET: &str = "essnap_cli";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET,
            error = %error,
            "operation failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
///
/// Performs exactly one snapshot API operation per invocation and prints the
/// raw Elasticsearch response body to stdout on success.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing()?;

    let service = config::create_snapshot_service(&cli);
    let params = cli.operation.to_params(&cli.aws.region);

    let response = service.dispatch(params).await?;

    tracing::info!(
        target: TRACING_TARGET,
        changed = true,
        status_code = response.status_code,
        "operation applied"
    );
    println!("{}", response.body);

    Ok(())
}
