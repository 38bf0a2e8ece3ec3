use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid connection settings for {target}: {message}")]
    InvalidProfile { target: String, message: String },

    #[error("Failed to connect to {target}: {message}")]
    Connection { target: String, message: String },

    #[error("Failed to list tables in {target}: {message}")]
    Query { target: String, message: String },
}

pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_error_messages_name_target() {
        let err = DbError::Connection {
            target: "app@db:3306/shop".into(),
            message: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to connect to app@db:3306/shop: connection refused"
        );
    }
}
