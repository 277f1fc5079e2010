//! Bearer-token verification using the `jsonwebtoken` crate
//!
//! Tokens are minted by the external identity provider that handles
//! sign-up and sign-in. This service only verifies the HS256 signature
//! with the shared secret and reads the claims.

use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a verified bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name, when the provider includes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address, when the provider includes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Display name, falling back to the subject ID
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.sub)
    }
}

/// Verifies bearer tokens issued by the identity provider
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

impl TokenVerifier {
    /// Create a verifier for the given shared secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Decode and validate a bearer token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    fn mint(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn test_claims() -> Claims {
        let now = Utc::now();
        Claims {
            sub: "user-123".to_string(),
            name: Some("Jordan".to_string()),
            email: Some("jordan@example.com".to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(15)).timestamp(),
        }
    }

    #[test]
    fn test_verify_valid_token() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint(&test_claims());

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.name.as_deref(), Some("Jordan"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_verify_expired_token() {
        let verifier = TokenVerifier::new(SECRET);
        let now = Utc::now();
        let token = mint(&Claims {
            exp: (now - Duration::hours(1)).timestamp(),
            iat: (now - Duration::hours(2)).timestamp(),
            ..test_claims()
        });

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_verify_wrong_secret() {
        let verifier = TokenVerifier::new("some-other-secret");
        let token = mint(&test_claims());

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_garbage() {
        let verifier = TokenVerifier::new(SECRET);

        let result = verifier.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut claims = test_claims();
        assert_eq!(claims.display_name(), "Jordan");

        claims.name = None;
        assert_eq!(claims.display_name(), "user-123");
    }
}
