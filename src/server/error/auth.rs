use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected endpoint.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The supplied bearer token failed signature or expiry validation.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Login with an unknown email or a wrong password. The client-facing
    /// message deliberately does not distinguish the two cases.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Password change attempted with a wrong current password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Current password does not match")]
    WrongCurrentPassword,

    /// Signing a fresh token failed; indicates a key misconfiguration.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to sign authentication token")]
    TokenCreation,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid leaking which part of the
/// credential check failed; full details are available in the error itself for
/// server-side logging.
///
/// # Returns
/// - 401 Unauthorized - Missing token, bad credentials, wrong current password
/// - 403 Forbidden - Invalid or expired token
/// - 500 Internal Server Error - Token signing failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Access token required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Invalid or expired token".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::WrongCurrentPassword => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Current password is incorrect".to_string(),
                }),
            )
                .into_response(),
            Self::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
