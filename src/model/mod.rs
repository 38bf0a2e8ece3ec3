use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub const DEFAULT_PORT: &str = "3306";
pub const DEFAULT_SSL_MODE: &str = "none";
pub const DEFAULT_CHARSET: &str = "utf8";

/// Set of table names read from one database.
///
/// Ordered so that anything printed from it is stable across runs.
pub type TableSet = BTreeSet<String>;

/// Which of the two configured databases something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Local,
    Remote,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Local => "local",
            Side::Remote => "remote",
        };
        write!(f, "{s}")
    }
}

/// Connection parameters for one MySQL instance.
///
/// Every field is kept as text exactly as it appeared in the config file.
/// Values are only interpreted when a connection is opened, so a bad port
/// or SSL mode is a connection failure rather than a load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: String,
    pub ssl_mode: String,
    pub charset: String,
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        Self {
            host: String::new(),
            user: String::new(),
            password: String::new(),
            database: String::new(),
            port: DEFAULT_PORT.to_string(),
            ssl_mode: DEFAULT_SSL_MODE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl ConnectionProfile {
    /// Builds a profile from raw config fields.
    ///
    /// Keys match case-insensitively, with an exact-case key taking
    /// precedence. Absent fields fall back to [`ConnectionProfile::default`].
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let pick = |name: &str, default: String| lookup(fields, name).unwrap_or(default);

        Self {
            host: pick("Host", defaults.host),
            user: pick("User", defaults.user),
            password: pick("Password", defaults.password),
            database: pick("Database", defaults.database),
            port: pick("Port", defaults.port),
            ssl_mode: pick("SslMode", defaults.ssl_mode),
            charset: pick("Charset", defaults.charset),
        }
    }

    /// `user@host:port/database`, safe to print: the password never appears.
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

fn lookup(fields: &BTreeMap<String, String>, name: &str) -> Option<String> {
    fields
        .get(name)
        .or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_fields_applies_defaults_when_absent() {
        let profile = ConnectionProfile::from_fields(&fields(&[
            ("Host", "db.internal"),
            ("Database", "shop"),
        ]));

        assert_eq!(profile.host, "db.internal");
        assert_eq!(profile.database, "shop");
        assert_eq!(profile.user, "");
        assert_eq!(profile.password, "");
        assert_eq!(profile.port, "3306");
        assert_eq!(profile.ssl_mode, "none");
        assert_eq!(profile.charset, "utf8");
    }

    #[test]
    fn from_fields_keeps_explicit_values() {
        let profile = ConnectionProfile::from_fields(&fields(&[
            ("Port", "3307"),
            ("SslMode", "Required"),
            ("Charset", "utf8mb4"),
        ]));

        assert_eq!(profile.port, "3307");
        assert_eq!(profile.ssl_mode, "Required");
        assert_eq!(profile.charset, "utf8mb4");
    }

    #[test]
    fn from_fields_matches_keys_case_insensitively() {
        let profile = ConnectionProfile::from_fields(&fields(&[
            ("host", "localhost"),
            ("SSLMODE", "preferred"),
        ]));

        assert_eq!(profile.host, "localhost");
        assert_eq!(profile.ssl_mode, "preferred");
    }

    #[test]
    fn from_fields_prefers_exact_case_key() {
        let profile =
            ConnectionProfile::from_fields(&fields(&[("HOST", "upper"), ("Host", "exact")]));

        assert_eq!(profile.host, "exact");
    }

    #[test]
    fn from_fields_keeps_empty_string_over_default() {
        let profile = ConnectionProfile::from_fields(&fields(&[("Port", "")]));

        assert_eq!(profile.port, "");
    }

    #[test]
    fn target_omits_password() {
        let profile = ConnectionProfile {
            host: "db".into(),
            user: "app".into(),
            password: "hunter2".into(),
            database: "shop".into(),
            ..Default::default()
        };

        assert_eq!(profile.target(), "app@db:3306/shop");
        assert!(!profile.target().contains("hunter2"));
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Local.to_string(), "local");
        assert_eq!(Side::Remote.to_string(), "remote");
    }
}
