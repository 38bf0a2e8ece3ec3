#![allow(unused_imports, dead_code)]

pub use sqlx::MySqlPool;
pub use std::io::Write;
pub use tablediff::mysql::connection::connect_options;
pub use tablediff::prelude::*;
pub use tablediff::report::HEADER;
pub use tempfile;
pub use testcontainers::runners::AsyncRunner;
pub use testcontainers::ContainerAsync;
pub use testcontainers_modules::mysql::Mysql;

/// Starts MySQL and returns a root profile for its `test` database.
pub async fn setup_mysql() -> (ContainerAsync<Mysql>, ConnectionProfile) {
    let container = Mysql::default().start().await.unwrap();
    let port = container.get_host_port_ipv4(3306).await.unwrap();
    let profile = ConnectionProfile {
        host: "127.0.0.1".to_string(),
        user: "root".to_string(),
        database: "test".to_string(),
        port: port.to_string(),
        ..Default::default()
    };
    (container, profile)
}

pub async fn admin_pool(profile: &ConnectionProfile) -> MySqlPool {
    MySqlPool::connect_with(connect_options(profile).unwrap())
        .await
        .unwrap()
}

pub async fn execute_all(pool: &MySqlPool, statements: &[&str]) {
    for statement in statements {
        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

pub fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}
