//! API error type and its HTTP mapping.

use audito_auth::AuthError;
use audito_db::error::DatabaseError;
use audito_report::RenderError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return. Bodies are `{ "error": "<message>" }` with
/// generic messages; internal details only reach the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No `Authorization` header.
    #[error("missing bearer token")]
    MissingToken,

    /// Token present but unverifiable or expired.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signup with an email that is already registered.
    #[error("user already exists")]
    UserExists,

    /// Request body failed validation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The requested audit does not exist.
    #[error("not found")]
    NotFound,

    /// The PDF encoder failed.
    #[error("render failure: {0}")]
    RenderFailure(String),

    /// Store or runtime failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials | Self::UserExists | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RenderFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &str {
        match self {
            Self::MissingToken => "No token",
            Self::InvalidToken(_) => "Token inválido",
            Self::InvalidCredentials => "Credenciales inválidas",
            Self::UserExists => "Usuario ya existe",
            Self::BadRequest(message) => message,
            Self::NotFound => "No encontrado",
            Self::RenderFailure(_) => "Error generando PDF",
            Self::Internal(_) => "Error interno",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Invalid(message) => Self::BadRequest(message),
            DatabaseError::Conflict(_) => Self::UserExists,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidToken(_) | AuthError::TokenExpired => {
                Self::InvalidToken(error.to_string())
            }
            AuthError::Signing(_) | AuthError::Hashing(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(error: RenderError) -> Self {
        Self::RenderFailure(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidToken("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UserExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::RenderFailure("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn render_errors_become_render_failures() {
        let api: ApiError = RenderError::Encoding("stream closed".into()).into();
        assert!(matches!(api, ApiError::RenderFailure(_)));
        assert_eq!(api.public_message(), "Error generando PDF");
    }

    #[test]
    fn store_errors_are_distinct_from_render_errors() {
        let api: ApiError = DatabaseError::Corrupt {
            path: "audits.jsonl".into(),
            reason: "bad".into(),
        }
        .into();
        assert!(matches!(api, ApiError::Internal(_)));
        assert_eq!(api.public_message(), "Error interno");
    }

    #[test]
    fn expired_tokens_are_unauthorized() {
        let api: ApiError = AuthError::TokenExpired.into();
        assert_eq!(api.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(api.public_message(), "Token inválido");
    }

    #[test]
    fn conflicts_map_to_user_exists() {
        let api: ApiError = DatabaseError::Conflict("dup".into()).into();
        assert!(matches!(api, ApiError::UserExists));
    }
}
