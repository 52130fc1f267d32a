use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::server::{error::auth::AuthError, error::AppError, state::AppState};

/// The authenticated caller, resolved from the `Authorization: Bearer` header.
///
/// Extracting this type guards a handler: requests without a token are rejected
/// with 401, requests with an invalid or expired token with 403. The token is
/// verified per request; no session state is kept server-side.
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token)?;

        Ok(Self {
            id: claims.sub,
            email: claims.email,
        })
    }
}

impl CurrentUser {
    /// Rejects access to another user's resource with 403.
    pub fn require_self(&self, user_id: Uuid) -> Result<(), AppError> {
        if self.id != user_id {
            return Err(AppError::Forbidden("Forbidden".to_string()));
        }

        Ok(())
    }
}
