//! tablediff - find MySQL tables that exist remotely but not locally.
//!
//! Two databases are named in a JSON config file. Each one is asked for its
//! table list through `INFORMATION_SCHEMA.TABLES`, one after the other, and
//! the tables that only the remote database has are printed.
//!
//! # Quick Start
//!
//! ```no_run
//! use tablediff::prelude::*;
//!
//! let mut out = std::io::stdout();
//! let result = run_blocking("dbconfig.json", &MySqlTableSource, &mut out).unwrap();
//!
//! for table in &result.only_in_remote {
//!     eprintln!("missing locally: {table}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`api`] - High-level entry points mirroring the binary
//! - [`config`] - `dbconfig.json` loading
//! - [`mysql`] - Connection handling and the table listing query
//! - [`diff`] - Remote-minus-local set difference
//! - [`report`] - Output written to a caller-supplied writer

pub mod api;
pub mod config;
pub mod diff;
pub mod model;
pub mod mysql;
pub mod prelude;
pub mod provider;
pub mod report;
pub mod util;
