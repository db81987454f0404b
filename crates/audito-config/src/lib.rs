//! # audito-config
//!
//! Layered configuration loading for Audito using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Legacy unprefixed variables: `PORT`, `JWT_SECRET`, `DATA_DIR`, `FRONTEND_URL`
//! 2. Environment variables (`AUDITO_*` prefix, `__` as separator)
//! 3. Project-level `audito.toml`
//! 4. User-level `~/.config/audito/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AUDITO_SERVER__PORT` -> `server.port`, `AUDITO_AUTH__JWT_SECRET`
//! -> `auth.jwt_secret`, etc.
//!
//! ```no_run
//! use audito_config::AuditoConfig;
//!
//! let config = AuditoConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod admin;
mod auth;
mod error;
mod server;
mod storage;

pub use admin::AdminConfig;
pub use auth::{AuthConfig, DEV_JWT_SECRET};
pub use error::ConfigError;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "audito.toml";

/// Unprefixed variables understood for compatibility with older deployments.
const LEGACY_ENV: [(&str, &str); 4] = [
    ("PORT", "server.port"),
    ("FRONTEND_URL", "server.frontend_url"),
    ("JWT_SECRET", "auth.jwt_secret"),
    ("DATA_DIR", "storage.data_dir"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditoConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl AuditoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    /// Values are not validated here: callers apply command-line overrides
    /// first, then call [`Self::validate`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(Env::prefixed("AUDITO_").split("__"));

        for (var, key) in LEGACY_ENV {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        figment
    }

    /// Reject values the server cannot start with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.jwt_secret".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.auth.token_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_ttl_hours".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("audito").join("config.toml"))
    }
}
