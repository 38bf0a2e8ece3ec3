use crate::config::ConfigError;
use crate::model::Side;
use crate::util::DbError;
use thiserror::Error;

/// Structured error type for tablediff library operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not list {side} tables: {source}")]
    Database {
        side: Side,
        #[source]
        source: DbError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

impl Error {
    pub fn database(side: Side, source: DbError) -> Self {
        Self::Database { side, source }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }
}
