//! Application configuration.
//!
//! `AppConfig` is built once at process start from environment variables
//! (after loading `.env`) and then handed to [`crate::state::AppState`]. Nothing
//! in the workspace reads the environment after startup.

use std::{env, path::Path};
use thiserror::Error;

const DSN_PREFIXES: [&str; 3] = ["sqlite:", "postgres://", "mysql://"];

/// Turns a `DATABASE_PATH` value into a connection URL.
///
/// A value that already looks like a DSN is used as-is; anything else is
/// treated as a SQLite file path and opened in read-write-create mode.
pub fn database_url(path_or_url: &str) -> String {
    if DSN_PREFIXES.iter().any(|p| path_or_url.starts_with(p)) {
        path_or_url.to_owned()
    } else {
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}

/// The SQLite file behind a `DATABASE_PATH` value, or `None` for in-memory
/// and non-SQLite databases.
pub fn sqlite_file(path_or_url: &str) -> Option<&Path> {
    if path_or_url.starts_with("postgres://") || path_or_url.starts_with("mysql://") {
        return None;
    }

    let path = match path_or_url.strip_prefix("sqlite:") {
        Some(rest) => {
            let rest = rest.strip_prefix("//").unwrap_or(rest);
            rest.split('?').next().unwrap_or_default()
        }
        None => path_or_url,
    };

    match path {
        "" | ":memory:" => None,
        path => Some(Path::new(path)),
    }
}

/// Errors raised while assembling the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Complete runtime configuration for the API, seeder and migration binaries.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: i64,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` is a thin wrapper over this; tests feed it a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let port = or("PORT", "3000");
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { key: "PORT", value: port })?;

        let duration = or("JWT_DURATION_MINUTES", "60");
        let jwt_duration_minutes = duration
            .parse::<i64>()
            .ok()
            .filter(|m| *m > 0)
            .ok_or(ConfigError::Invalid {
                key: "JWT_DURATION_MINUTES",
                value: duration,
            })?;

        Ok(Self {
            env: or("APP_ENV", "development"),
            project_name: or("PROJECT_NAME", "blog-api"),
            log_level: or("LOG_LEVEL", "api=info"),
            log_file: or("LOG_FILE", "api.log"),
            log_to_stdout: or("LOG_TO_STDOUT", "false") == "true",
            database_path: required("DATABASE_PATH")?,
            host: or("HOST", "127.0.0.1"),
            port,
            jwt_secret: required("JWT_SECRET")?,
            jwt_duration_minutes,
            admin_username: or("ADMIN_USERNAME", "admin"),
            admin_email: or("ADMIN_EMAIL", "admin@example.com"),
            admin_password: or("ADMIN_PASSWORD", "password123"),
        })
    }

    /// Configuration used by unit and integration tests: in-memory SQLite and
    /// a fixed signing secret.
    pub fn for_tests() -> Self {
        Self {
            env: "test".into(),
            project_name: "blog-api".into(),
            log_level: "api=debug".into(),
            log_file: "api.log".into(),
            log_to_stdout: false,
            database_path: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 3000,
            jwt_secret: "test-secret".into(),
            jwt_duration_minutes: 60,
            admin_username: "admin".into(),
            admin_email: "admin@example.com".into(),
            admin_password: "password123".into(),
        }
    }

    pub fn database_url(&self) -> String {
        database_url(&self.database_path)
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}
