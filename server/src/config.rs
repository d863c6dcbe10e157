//! Process configuration read from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and calls [`Config::from_env`] once.
//! Only `DATABASE_URL` is required; everything else has a default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ADMIN_ID: i64 = 1;
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Parse an env var, falling back to `default` when unset or unparseable.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Account created at startup when no user with that account exists.
#[derive(Clone)]
pub struct AdminSeed {
    pub id: i64,
    pub account: String,
    pub password: String,
}

impl AdminSeed {
    /// Requires both `ADMIN_ACCOUNT` and `ADMIN_PASSWORD`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let account = env_nonempty("ADMIN_ACCOUNT")?;
        let password = std::env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty())?;
        Some(Self { id: env_parse("ADMIN_ID", DEFAULT_ADMIN_ID), account, password })
    }
}

impl fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeed")
            .field("id", &self.id)
            .field("account", &self.account)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Directory holding the built client (`index.html` plus `pkg/`).
    pub site_root: PathBuf,
    pub admin: Option<AdminSeed>,
    pub pbkdf2_iterations: u32,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] without `DATABASE_URL` and
    /// [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_nonempty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let site_root = env_nonempty("SITE_ROOT")
            .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"), PathBuf::from);

        Ok(Self {
            database_url,
            port,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            site_root,
            admin: AdminSeed::from_env(),
            pbkdf2_iterations: env_parse("PBKDF2_ITERATIONS", DEFAULT_PBKDF2_ITERATIONS).max(1),
        })
    }
}
