//! Default administrator seeded into an empty user store.

use serde::{Deserialize, Serialize};

fn default_email() -> String {
    "admin@example.com".to_string()
}

fn default_name() -> String {
    "Admin".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            name: default_name(),
            password: default_password(),
        }
    }
}
