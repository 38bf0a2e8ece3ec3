pub mod connection;
pub mod introspect;

pub use connection::MySqlConnection;
pub use introspect::list_tables;

use crate::model::ConnectionProfile;
use crate::util::Result;

/// Opens a connection for `profile`, lists its tables, and closes it again.
///
/// The connection is dropped (and its socket closed) if the query fails.
pub async fn list_profile_tables(profile: &ConnectionProfile) -> Result<Vec<String>> {
    let mut connection = MySqlConnection::open(profile).await?;
    tracing::debug!(target_db = connection.target(), "connected");

    let tables = list_tables(&mut connection, &profile.database).await?;

    if let Err(e) = connection.close().await {
        tracing::warn!(error = %e, "connection did not close cleanly");
    }

    Ok(tables)
}
