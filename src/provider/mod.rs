use crate::model::ConnectionProfile;
use crate::mysql::list_profile_tables;
use crate::util::Result;
use async_trait::async_trait;

/// Somewhere table names can be read from, given a connection profile.
#[async_trait]
pub trait TableSource {
    async fn list_tables(&self, profile: &ConnectionProfile) -> Result<Vec<String>>;
}

/// Reads table names from a live MySQL server.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlTableSource;

#[async_trait]
impl TableSource for MySqlTableSource {
    async fn list_tables(&self, profile: &ConnectionProfile) -> Result<Vec<String>> {
        list_profile_tables(profile).await
    }
}
