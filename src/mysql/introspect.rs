use crate::mysql::connection::MySqlConnection;
use crate::util::{DbError, Result};
use sqlx::Row;

// information_schema columns come back as binary strings on some servers.
const LIST_TABLES: &str = r#"
    SELECT CAST(TABLE_NAME AS CHAR) AS table_name
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ?
"#;

/// Names of every table in `database`, in the order the server returns them.
pub async fn list_tables(connection: &mut MySqlConnection, database: &str) -> Result<Vec<String>> {
    let target = connection.target().to_string();

    let rows = sqlx::query(LIST_TABLES)
        .bind(database)
        .fetch_all(connection.inner())
        .await
        .map_err(|e| DbError::Query {
            target: target.clone(),
            message: e.to_string(),
        })?;

    rows.iter()
        .map(|row| {
            row.try_get::<String, _>("table_name")
                .map_err(|e| DbError::Query {
                    target: target.clone(),
                    message: format!("unexpected row shape: {e}"),
                })
        })
        .collect()
}
