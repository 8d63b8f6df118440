//! Application state container shared across Axum route handlers.
//!
//! Holds the database connection, the configuration the process was started
//! with, and the JWT keys derived from the signing secret. Cloning is cheap:
//! every field sits behind an `Arc`, since `DatabaseConnection` is not `Clone`
//! when sea-orm's `mock` feature is enabled.

use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: Arc<DatabaseConnection>,
    config: Arc<AppConfig>,
    keys: Arc<JwtKeys>,
}

impl AppState {
    /// Creates a new `AppState`, deriving the JWT keys from `config.jwt_secret`.
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        let keys = JwtKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        };

        Self {
            db: Arc::new(db),
            config: Arc::new(config),
            keys: Arc::new(keys),
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Takes the connection back out once every other clone of the state has
    /// been dropped. Returns `None` while the state is still shared.
    pub fn into_db(self) -> Option<DatabaseConnection> {
        Arc::try_unwrap(self.db).ok()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.keys.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.keys.decoding
    }

    pub fn jwt_duration_minutes(&self) -> i64 {
        self.config.jwt_duration_minutes
    }
}
