//! Bearer-token extractor.

use audito_core::identity::AuthIdentity;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller. Handlers that take this reject requests without
/// a valid `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthIdentity);

impl AuthUser {
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(ApiError::MissingToken)?;
        let token = bearer_token(header.to_str().unwrap_or_default())
            .ok_or_else(|| ApiError::InvalidToken("malformed authorization header".into()))?;
        let claims = state.keys.verify(token)?;
        Ok(Self(claims.to_identity()))
    }
}

/// The token part of `Bearer <token>`. The scheme is matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
