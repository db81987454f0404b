use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Auditor,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Auditor => "auditor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored user account, including the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    /// Empty when the account was seeded without a password.
    #[serde(default)]
    pub password_hash: String,
    pub role: UserRole,
}

/// The user as returned to clients: never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_drops_password_hash() {
        let user = User {
            id: "usr-1".into(),
            name: "Admin".into(),
            email: "admin@example.com".into(),
            password_hash: "$2b$10$hash".into(),
            role: UserRole::Admin,
        };
        let json = serde_json::to_value(user.to_public()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "admin");
    }
}
