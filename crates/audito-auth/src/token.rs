//! HS256 bearer tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::AuditoClaims;
use crate::error::AuthError;

/// Signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: TimeDelta,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtKeys {
    #[must_use]
    pub fn new(secret: &str, ttl_hours: u32) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: TimeDelta::hours(i64::from(ttl_hours)),
        }
    }

    /// Issue a token for `user_id`, valid for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signing` if encoding fails.
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AuditoClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        self.encode(&claims)
    }

    /// Sign arbitrary claims. Used by `issue` and by tests that need expired tokens.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signing` if encoding fails.
    pub fn encode(&self, claims: &AuditoClaims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|error| AuthError::Signing(error.to_string()))
    }

    /// Verify signature and expiry, returning the claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` for an expired token and
    /// `AuthError::InvalidToken` for anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<AuditoClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        jsonwebtoken::decode::<AuditoClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(error.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn issued_token_verifies() {
        let keys = JwtKeys::new("test-secret", 8);
        let token = keys.issue("usr-0000aaaa").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "usr-0000aaaa");
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtKeys::new("secret-a", 8).issue("usr-1").unwrap();
        let result = JwtKeys::new("secret-b", 8).verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = JwtKeys::new("test-secret", 8);
        let now = Utc::now().timestamp();
        let token = keys
            .encode(&AuditoClaims {
                sub: "usr-1".into(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();
        assert!(matches!(keys.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = JwtKeys::new("test-secret", 8);
        assert!(matches!(
            keys.verify("not.a.jwt"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
