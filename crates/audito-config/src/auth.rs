//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Secret used when nothing is configured. Only suitable for local development.
pub const DEV_JWT_SECRET: &str = "jwt_dev_secret";

fn default_jwt_secret() -> String {
    DEV_JWT_SECRET.to_string()
}

const fn default_token_ttl_hours() -> u32 {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret for signing bearer tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

impl AuthConfig {
    /// Whether the built-in development secret is in use.
    #[must_use]
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
