use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tablediff::api::{self, Error};
use tablediff::config::DEFAULT_CONFIG_PATH;
use tablediff::provider::MySqlTableSource;
use tablediff::report::report_database_error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tablediff", version)]
#[command(about = "List MySQL tables present in a remote database but missing locally")]
#[command(
    long_about = "List MySQL tables present in a remote database but missing locally.\n\n\
    Connection settings are read from dbconfig.json in the current directory. \
    Set RUST_LOG to see diagnostics on stderr."
)]
struct Cli {}

pub async fn run() -> Result<ExitCode> {
    let _cli = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match api::run(DEFAULT_CONFIG_PATH, &MySqlTableSource, &mut out).await {
        Ok(result) => {
            if !result.is_complete() {
                tracing::warn!(
                    failed = result.failures.len(),
                    "report is based on incomplete table lists"
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        // Already reported to stdout by the api layer.
        Err(Error::Config(_)) => Ok(ExitCode::FAILURE),
        Err(Error::Database { source, .. }) => {
            report_database_error(&mut out, &source)?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
