//! High-level API for embedding tablediff in other applications.
//!
//! [`run`] is what the binary does: load the config file, list the local and
//! remote tables one after the other, and print the tables that only exist
//! remotely. [`compare`] does the same starting from an already loaded
//! [`Config`].
//!
//! # Example
//!
//! ```no_run
//! use tablediff::prelude::*;
//!
//! let config = load_config("dbconfig.json").unwrap();
//! let mut out = std::io::stdout();
//! let result = compare_blocking(&config, &MySqlTableSource, &mut out).unwrap();
//!
//! if !result.is_complete() {
//!     eprintln!("{} database(s) could not be read", result.failures.len());
//! }
//! ```
//!
//! # Async vs Blocking
//!
//! Blocking variants create a new single-threaded tokio runtime per call.

mod error;
mod results;

pub use error::Error;
pub use results::{CompareResult, DatabaseFailure};

use crate::config::{self, Config, ErrorPolicy};
use crate::diff::tables_only_in_remote;
use crate::model::{ConnectionProfile, Side};
use crate::provider::TableSource;
use crate::report::{report, report_config_error, report_database_error};
use std::io::Write;
use std::path::Path;

/// Loads the config at `config_path` and compares the two databases it names.
///
/// A config that cannot be loaded is reported to `out` and no database is
/// contacted.
pub async fn run<S, W>(
    config_path: impl AsRef<Path>,
    source: &S,
    out: &mut W,
) -> Result<CompareResult, Error>
where
    S: TableSource + ?Sized,
    W: Write + ?Sized,
{
    let config = match config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = %e, "config load failed");
            report_config_error(out, &e)?;
            return Err(Error::Config(e));
        }
    };

    compare(&config, source, out).await
}

/// Lists local then remote tables and reports those only found remotely.
///
/// Under [`ErrorPolicy::Abort`] the first database failure is returned before
/// anything is written. Under [`ErrorPolicy::Continue`] the failure is
/// reported, the database counts as having no tables, and it is recorded in
/// [`CompareResult::failures`].
pub async fn compare<S, W>(config: &Config, source: &S, out: &mut W) -> Result<CompareResult, Error>
where
    S: TableSource + ?Sized,
    W: Write + ?Sized,
{
    let policy = config.on_database_error;
    let mut failures = Vec::new();

    let local_tables =
        list_side(Side::Local, &config.local, policy, source, out, &mut failures).await?;
    let remote_tables =
        list_side(Side::Remote, &config.remote, policy, source, out, &mut failures).await?;

    let only_in_remote = tables_only_in_remote(&remote_tables, &local_tables);
    tracing::info!(
        local = local_tables.len(),
        remote = remote_tables.len(),
        only_in_remote = only_in_remote.len(),
        "comparison finished"
    );

    report(out, &only_in_remote)?;

    Ok(CompareResult {
        local_tables,
        remote_tables,
        only_in_remote,
        failures,
    })
}

async fn list_side<S, W>(
    side: Side,
    profile: &ConnectionProfile,
    policy: ErrorPolicy,
    source: &S,
    out: &mut W,
    failures: &mut Vec<DatabaseFailure>,
) -> Result<Vec<String>, Error>
where
    S: TableSource + ?Sized,
    W: Write + ?Sized,
{
    tracing::info!(%side, target_db = %profile.target(), "listing tables");

    match source.list_tables(profile).await {
        Ok(tables) => {
            tracing::debug!(%side, count = tables.len(), "listed tables");
            Ok(tables)
        }
        Err(e) if policy == ErrorPolicy::Abort => Err(Error::database(side, e)),
        Err(e) => {
            tracing::warn!(%side, error = %e, "treating database as having no tables");
            report_database_error(out, &e)?;
            failures.push(DatabaseFailure {
                side,
                message: e.to_string(),
            });
            Ok(Vec::new())
        }
    }
}

// ============================================================================
// Blocking variants
// ============================================================================

fn create_runtime() -> Result<tokio::runtime::Runtime, Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::runtime(e.to_string()))
}

/// Blocking variant of [`run`].
pub fn run_blocking<S, W>(
    config_path: impl AsRef<Path>,
    source: &S,
    out: &mut W,
) -> Result<CompareResult, Error>
where
    S: TableSource + ?Sized,
    W: Write + ?Sized,
{
    create_runtime()?.block_on(run(config_path, source, out))
}

/// Blocking variant of [`compare`].
pub fn compare_blocking<S, W>(config: &Config, source: &S, out: &mut W) -> Result<CompareResult, Error>
where
    S: TableSource + ?Sized,
    W: Write + ?Sized,
{
    create_runtime()?.block_on(compare(config, source, out))
}
