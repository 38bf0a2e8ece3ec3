use crate::model::ConnectionProfile;
use crate::util::{DbError, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use sqlx::{ConnectOptions, Connection};

/// A single open MySQL connection.
///
/// One connection per listing, never pooled, so a failed connect is not
/// retried. Dropping the value closes the socket; [`MySqlConnection::close`]
/// does so gracefully.
pub struct MySqlConnection {
    conn: sqlx::MySqlConnection,
    target: String,
}

impl MySqlConnection {
    pub async fn open(profile: &ConnectionProfile) -> Result<Self> {
        let options = connect_options(profile)?;
        let target = profile.target();

        let conn = options.connect().await.map_err(|e| DbError::Connection {
            target: target.clone(),
            message: e.to_string(),
        })?;

        Ok(MySqlConnection { conn, target })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn inner(&mut self) -> &mut sqlx::MySqlConnection {
        &mut self.conn
    }

    pub async fn close(self) -> Result<()> {
        let target = self.target;
        self.conn
            .close()
            .await
            .map_err(|e| DbError::Connection {
                target,
                message: format!("error while closing connection: {e}"),
            })
    }
}

/// Translates a profile into driver options without touching the network.
pub fn connect_options(profile: &ConnectionProfile) -> Result<MySqlConnectOptions> {
    let port: u16 = profile.port.parse().map_err(|_| DbError::InvalidProfile {
        target: profile.target(),
        message: format!("port '{}' is not a valid TCP port", profile.port),
    })?;

    let ssl_mode = parse_ssl_mode(&profile.ssl_mode).ok_or_else(|| DbError::InvalidProfile {
        target: profile.target(),
        message: format!(
            "unknown SSL mode '{}'. Valid modes: none, preferred, required, verifyca, verifyfull",
            profile.ssl_mode
        ),
    })?;

    Ok(MySqlConnectOptions::new()
        .host(&profile.host)
        .port(port)
        .username(&profile.user)
        .password(&profile.password)
        .database(&profile.database)
        .ssl_mode(ssl_mode)
        .charset(&profile.charset))
}

/// Accepts both the Connector/NET spellings and the MySQL server spellings.
pub fn parse_ssl_mode(mode: &str) -> Option<MySqlSslMode> {
    match mode.to_lowercase().as_str() {
        "none" | "disabled" => Some(MySqlSslMode::Disabled),
        "preferred" => Some(MySqlSslMode::Preferred),
        "required" => Some(MySqlSslMode::Required),
        "verifyca" | "verify_ca" => Some(MySqlSslMode::VerifyCa),
        "verifyfull" | "verify_identity" => Some(MySqlSslMode::VerifyIdentity),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ConnectionProfile {
        ConnectionProfile {
            host: "db.internal".into(),
            user: "app".into(),
            password: "secret".into(),
            database: "shop".into(),
            ..Default::default()
        }
    }

    #[test]
    fn connect_options_uses_profile_fields() {
        let options = connect_options(&profile()).unwrap();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("shop"));
    }

    #[test]
    fn connect_options_rejects_non_numeric_port() {
        let profile = ConnectionProfile {
            port: "mysql".into(),
            ..profile()
        };

        let err = connect_options(&profile).unwrap_err();

        assert!(matches!(err, DbError::InvalidProfile { .. }));
        assert!(err.to_string().contains("'mysql'"));
    }

    #[test]
    fn connect_options_rejects_out_of_range_port() {
        let profile = ConnectionProfile {
            port: "70000".into(),
            ..profile()
        };

        assert!(connect_options(&profile).is_err());
    }

    #[test]
    fn connect_options_rejects_unknown_ssl_mode() {
        let profile = ConnectionProfile {
            ssl_mode: "sometimes".into(),
            ..profile()
        };

        let err = connect_options(&profile).unwrap_err();

        assert!(err.to_string().contains("sometimes"));
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn parse_ssl_mode_accepts_known_spellings() {
        assert!(matches!(parse_ssl_mode("none"), Some(MySqlSslMode::Disabled)));
        assert!(matches!(parse_ssl_mode("None"), Some(MySqlSslMode::Disabled)));
        assert!(matches!(parse_ssl_mode("DISABLED"), Some(MySqlSslMode::Disabled)));
        assert!(matches!(parse_ssl_mode("Preferred"), Some(MySqlSslMode::Preferred)));
        assert!(matches!(parse_ssl_mode("required"), Some(MySqlSslMode::Required)));
        assert!(matches!(parse_ssl_mode("VerifyCA"), Some(MySqlSslMode::VerifyCa)));
        assert!(matches!(parse_ssl_mode("verify_identity"), Some(MySqlSslMode::VerifyIdentity)));
        assert!(parse_ssl_mode("").is_none());
    }

    #[tokio::test]
    async fn open_keeps_driver_message_intact_with_short_password() {
        // Nothing listens on port 1, so the connect fails immediately.
        let profile = ConnectionProfile {
            host: "127.0.0.1".into(),
            user: "root".into(),
            password: "a".into(),
            port: "1".into(),
            ..profile()
        };

        let err = match MySqlConnection::open(&profile).await {
            Ok(_) => panic!("connected to a closed port"),
            Err(err) => err,
        };
        let message = err.to_string();

        assert!(matches!(err, DbError::Connection { .. }));
        assert!(message.starts_with("Failed to connect to root@127.0.0.1:1/shop: "));
        assert!(message.contains("database"));
        assert!(!message.contains("***"));
    }
}
