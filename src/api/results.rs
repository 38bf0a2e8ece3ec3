use crate::model::{Side, TableSet};
use serde::Serialize;

/// A database that could not be listed and was treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseFailure {
    pub side: Side,
    pub message: String,
}

/// Result of comparing the local and remote databases.
#[derive(Debug, Clone, Serialize)]
pub struct CompareResult {
    /// Table names from the local database, in server order
    pub local_tables: Vec<String>,
    /// Table names from the remote database, in server order
    pub remote_tables: Vec<String>,
    /// Tables in remote but not in local
    pub only_in_remote: TableSet,
    /// Databases that failed and were counted as having no tables
    pub failures: Vec<DatabaseFailure>,
}

impl CompareResult {
    /// Whether both databases were listed successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
