pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use util::config::{AppConfig, sqlite_file};

/// Opens the database described by `config.database_path`.
///
/// See [`util::config::database_url`] for how plain paths are interpreted.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    // SQLite won't create intermediate dirs.
    if let Some(parent) = sqlite_file(&config.database_path).and_then(|f| f.parent()) {
        let _ = std::fs::create_dir_all(parent);
    }

    let mut options = ConnectOptions::new(config.database_url());
    options.sqlx_logging(false);

    tracing::debug!(database = %config.database_path, "Connecting to database");
    Database::connect(options).await
}

/// Generates a fresh primary key.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
