//! Environment configuration for the server binary.
//!
//! All variables are required; a missing or empty value is fatal to
//! startup. The service has no partial or offline mode.

use std::env;
use thiserror::Error;

const ENV_DB_ADDRESS: &str = "DB_ADDR";
const ENV_DB_USER: &str = "DB_USER";
const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
const ENV_DB_DATABASE: &str = "DB_DATABASE";
const ENV_PORT: &str = "PORT";
const ENV_ADMIN_TOKEN: &str = "ADMIN_TOKEN";

/// Errors raised while reading startup configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {name}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Rejected raw value.
        value: String,
    },
}

/// Runtime configuration of the tasks server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    db_address: String,
    db_user: String,
    db_password: String,
    db_database: String,
    port: u16,
    admin_token: String,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is absent or the
    /// port does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_raw = required(ENV_PORT)?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue {
                name: ENV_PORT,
                value: port_raw,
            })?;
        Ok(Self {
            db_address: required(ENV_DB_ADDRESS)?,
            db_user: required(ENV_DB_USER)?,
            db_password: required(ENV_DB_PASSWORD)?,
            db_database: required(ENV_DB_DATABASE)?,
            port,
            admin_token: required(ENV_ADMIN_TOKEN)?,
        })
    }

    /// Returns the `PostgreSQL` connection URL.
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.db_user, self.db_password, self.db_address, self.db_database
        )
    }

    /// Returns the port the RPC surface binds to.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the bearer token granted the `admin` role.
    #[must_use]
    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingEnv(name))
}
