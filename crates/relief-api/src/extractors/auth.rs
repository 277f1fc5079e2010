//! Authentication extractor
//!
//! Extracts and verifies bearer tokens from the Authorization header.
//! Tokens are minted by the external identity provider; the server only
//! verifies them and reads the claims.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID (token subject)
    pub uid: String,
    /// Display name, when the provider includes one
    pub name: Option<String>,
    /// Email address, when the provider includes one
    pub email: Option<String>,
}

impl AuthUser {
    /// Display name, falling back to the user ID
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uid)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .token_verifier()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid bearer token");
                ApiError::App(e)
            })?;

        Ok(AuthUser {
            uid: claims.sub,
            name: claims.name,
            email: claims.email,
        })
    }
}
