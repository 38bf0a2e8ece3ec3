//! Loading of `dbconfig.json`.
//!
//! The file holds two connection sections, `LocalConfig` and `RemoteConfig`,
//! plus an optional `OnDatabaseError` policy:
//!
//! ```json
//! {
//!   "LocalConfig":  { "Host": "localhost", "User": "root", "Password": "", "Database": "shop" },
//!   "RemoteConfig": { "Host": "db.example.com", "User": "ro", "Password": "secret", "Database": "shop", "SslMode": "required" },
//!   "OnDatabaseError": "continue"
//! }
//! ```

use crate::model::ConnectionProfile;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "dbconfig.json";

const LOCAL_SECTION: &str = "LocalConfig";
const REMOTE_SECTION: &str = "RemoteConfig";
const POLICY_KEY: &str = "OnDatabaseError";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing section '{0}'")]
    MissingSection(String),

    #[error("section '{0}' must be a JSON object")]
    InvalidSection(String),

    #[error("invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },
}

/// What to do when one of the two databases cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the failure, treat that database as having no tables, keep going.
    #[default]
    Continue,
    /// Stop the run and surface the failure.
    Abort,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continue" => Ok(ErrorPolicy::Continue),
            "abort" => Ok(ErrorPolicy::Abort),
            _ => Err(format!(
                "unknown policy '{s}'. Valid policies: continue, abort"
            )),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorPolicy::Continue => "continue",
            ErrorPolicy::Abort => "abort",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub local: ConnectionProfile,
    pub remote: ConnectionProfile,
    pub on_database_error: ErrorPolicy,
}

/// Reads and parses the config file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read config file");
    parse(&text)
}

pub fn parse(text: &str) -> Result<Config, ConfigError> {
    let document: Map<String, Value> = serde_json::from_str(text)?;

    let local = ConnectionProfile::from_fields(&section_fields(&document, LOCAL_SECTION)?);
    let remote = ConnectionProfile::from_fields(&section_fields(&document, REMOTE_SECTION)?);
    let on_database_error = parse_policy(&document)?;

    Ok(Config {
        local,
        remote,
        on_database_error,
    })
}

fn section_fields(
    document: &Map<String, Value>,
    name: &str,
) -> Result<BTreeMap<String, String>, ConfigError> {
    let section = match find_key(document, name) {
        None | Some(Value::Null) => return Err(ConfigError::MissingSection(name.to_string())),
        Some(Value::Object(section)) => section,
        Some(_) => return Err(ConfigError::InvalidSection(name.to_string())),
    };

    let mut fields = BTreeMap::new();
    for (key, value) in section {
        if let Some(text) = field_text(name, key, value)? {
            fields.insert(key.clone(), text);
        }
    }
    Ok(fields)
}

/// Scalar values become text; `null` counts as absent.
fn field_text(section: &str, key: &str, value: &Value) -> Result<Option<String>, ConfigError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(true) => Ok(Some("True".to_string())),
        Value::Bool(false) => Ok(Some("False".to_string())),
        Value::Array(_) | Value::Object(_) => Err(ConfigError::InvalidField {
            field: format!("{section}.{key}"),
            message: "expected a string".to_string(),
        }),
    }
}

fn parse_policy(document: &Map<String, Value>) -> Result<ErrorPolicy, ConfigError> {
    match find_key(document, POLICY_KEY) {
        None | Some(Value::Null) => Ok(ErrorPolicy::default()),
        Some(Value::String(s)) => s.parse().map_err(|message| ConfigError::InvalidField {
            field: POLICY_KEY.to_string(),
            message,
        }),
        Some(_) => Err(ConfigError::InvalidField {
            field: POLICY_KEY.to_string(),
            message: "expected a string".to_string(),
        }),
    }
}

/// Exact-case key first, then the first case-insensitive match in byte order.
fn find_key<'a>(document: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    document.get(name).or_else(|| {
        document
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}
