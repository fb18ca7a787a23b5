//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MP_ACCESS_TOKEN` - `MercadoPago` access token for preference creation
//!
//! ## Optional
//! - `DATABASE_URL` - `SQLite` connection string (default: `sqlite:///tmp/almacen.db`)
//! - `ALMACEN_HOST` - Bind address (default: 127.0.0.1)
//! - `ALMACEN_PORT` - Listen port (default: 8000)
//! - `MELI_SITE` - `MercadoLibre` site id for search (default: MLA)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct AppConfig {
    /// `SQLite` database connection URL (local file-backed store)
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// `MercadoLibre` site id used for product search (e.g. MLA for Argentina)
    pub meli_site: String,
    /// `MercadoPago` access token (server-side only)
    pub mp_access_token: SecretString,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("meli_site", &self.meli_site)
            .field("mp_access_token", &"[REDACTED]")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_env_or_default("DATABASE_URL", "sqlite:///tmp/almacen.db");
        let host = get_env_or_default("ALMACEN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ALMACEN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ALMACEN_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ALMACEN_PORT".to_string(), e.to_string()))?;
        let meli_site = get_env_or_default("MELI_SITE", "MLA");
        let mp_access_token = get_required_secret("MP_ACCESS_TOKEN")?;

        Ok(Self {
            database_url,
            host,
            port,
            meli_site,
            mp_access_token,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
