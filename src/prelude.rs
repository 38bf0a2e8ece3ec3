//! Convenient re-exports for common tablediff usage.
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
//! println!("{} table(s) missing locally", result.only_in_remote.len());
//! ```

// Async functions
pub use crate::api::{compare, run};

// Blocking functions
pub use crate::api::{compare_blocking, run_blocking};

// Results and errors
pub use crate::api::{CompareResult, DatabaseFailure, Error};
pub use crate::config::ConfigError;
pub use crate::util::DbError;

// Config
pub use crate::config::{load as load_config, parse as parse_config, Config, ErrorPolicy};

// Core types
pub use crate::diff::tables_only_in_remote;
pub use crate::model::{ConnectionProfile, Side, TableSet};
pub use crate::provider::{MySqlTableSource, TableSource};
