//! User repository.
//!
//! Users live in `users.json`. Password hashing runs on a blocking worker so
//! the iterated digest never stalls the async runtime.

use audito_auth::password::{hash_password, verify_password};
use audito_core::entities::{User, UserRole};
use audito_core::errors::CoreError;
use audito_core::ids::{PREFIX_USER, generate_id};
use serde::{Deserialize, Serialize};

use crate::USERS_FILE;
use crate::error::DatabaseError;
use crate::service::{AuditoService, unused_id};

/// On-disk shape of `users.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UsersDocument {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Fields required to register a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

pub(crate) async fn hash_in_background(password: String) -> Result<String, DatabaseError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| DatabaseError::Background(e.to_string()))?
        .map_err(DatabaseError::from)
}

impl AuditoService {
    /// All users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `users.json` is unreadable.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        Ok(self.db().read_document::<UsersDocument>(USERS_FILE)?.users)
    }

    /// Find a user by exact email match.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `users.json` is unreadable.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        Ok(self
            .list_users()
            .await?
            .into_iter()
            .find(|user| user.email == email))
    }

    /// Register a user. Email must be unique; email and password must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Invalid` for blank credentials,
    /// `DatabaseError::Conflict` for a taken email, `DatabaseError::IdExhausted`
    /// if no unused ID can be drawn, or an I/O error.
    pub async fn create_user(&self, new: NewUser) -> Result<User, DatabaseError> {
        self.insert_user(new, || generate_id(PREFIX_USER)).await
    }

    pub(crate) async fn insert_user(
        &self,
        new: NewUser,
        next_id: impl FnMut() -> Result<String, CoreError>,
    ) -> Result<User, DatabaseError> {
        if new.email.trim().is_empty() {
            return Err(DatabaseError::Invalid("email is required".into()));
        }
        if new.password.is_empty() {
            return Err(DatabaseError::Invalid("password is required".into()));
        }

        let _guard = self.lock_writes().await;
        let mut doc: UsersDocument = self.db().read_document(USERS_FILE)?;
        if doc.users.iter().any(|user| user.email == new.email) {
            return Err(DatabaseError::Conflict(format!(
                "user with email {} already exists",
                new.email
            )));
        }

        let id = unused_id(next_id, |id| doc.users.iter().any(|user| user.id == id))?;
        let user = User {
            id,
            name: new.name,
            email: new.email,
            password_hash: hash_in_background(new.password).await?,
            role: new.role,
        };
        doc.users.push(user.clone());
        self.db().write_document(USERS_FILE, &doc)?;
        tracing::info!(user_id = %user.id, role = %user.role, "user created");
        Ok(user)
    }

    /// Check credentials. Returns the user only when the password verifies.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `users.json` is unreadable.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let Some(user) = self.find_user_by_email(email).await? else {
            return Ok(None);
        };
        let password = password.to_string();
        let stored = user.password_hash.clone();
        let ok = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .map_err(|e| DatabaseError::Background(e.to_string()))?;
        Ok(ok.then_some(user))
    }
}
