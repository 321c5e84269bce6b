//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use sea_orm::ConnectOptions;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_MIN_CONNECTIONS, DEFAULT_DB_NAME,
    DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database: DatabaseConfig,
}

/// Relational store connection settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    password: String,
    pub name: String,
    /// Full connection URL; takes precedence over the individual fields
    pub url_override: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("url_override", &self.url_override.as_ref().map(|_| "[REDACTED]"))
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("PORT", DEFAULT_SERVER_PORT),
            database: DatabaseConfig::from_env(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            database: DatabaseConfig::default(),
        }
    }
}

impl DatabaseConfig {
    fn from_env() -> Self {
        Self {
            host: env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
            port: parse_var("DB_PORT", DEFAULT_DB_PORT),
            user: env::var("DB_USER").unwrap_or_else(|_| DEFAULT_DB_USER.to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| DEFAULT_DB_PASSWORD.to_string()),
            name: env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            url_override: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: parse_var("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            min_connections: parse_var("DB_MIN_CONNECTIONS", DEFAULT_DB_MIN_CONNECTIONS),
        }
    }

    /// Settings for a fixed URL, e.g. `sqlite::memory:` in tests.
    pub fn with_url(url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            url_override: Some(url.into()),
            max_connections,
            min_connections: max_connections.min(DEFAULT_DB_MIN_CONNECTIONS),
            ..Self::default()
        }
    }

    /// Connection URL, assembled as a MySQL DSN unless overridden.
    pub fn url(&self) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }

    /// Pool options handed to SeaORM.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url());
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .sqlx_logging(false);
        options
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
            name: DEFAULT_DB_NAME.to_string(),
            url_override: None,
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            min_connections: DEFAULT_DB_MIN_CONNECTIONS,
        }
    }
}

/// Read and parse an environment variable, falling back on absence or parse failure.
fn parse_var<T: FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
