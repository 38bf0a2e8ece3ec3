//! User-facing output.
//!
//! Every line the program prints for the user goes through one of these
//! functions and into a caller-supplied writer.

use crate::config::ConfigError;
use crate::util::DbError;
use std::io::{self, Write};

pub const HEADER: &str = "Tables in remote database but not in local database:";

/// Writes the header followed by one table name per line.
pub fn report<W, I>(out: &mut W, names: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    writeln!(out, "{HEADER}")?;
    for name in names {
        writeln!(out, "{}", name.as_ref())?;
    }
    out.flush()
}

pub fn report_database_error<W: Write + ?Sized>(out: &mut W, error: &DbError) -> io::Result<()> {
    writeln!(out, "Error: {error}")
}

pub fn report_config_error<W: Write + ?Sized>(out: &mut W, error: &ConfigError) -> io::Result<()> {
    writeln!(out, "Failed to load config: {error}")?;
    writeln!(out, "Failed to load configuration.")?;
    out.flush()
}
