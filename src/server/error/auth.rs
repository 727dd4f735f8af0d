use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

const NEW_TOKEN_RESOLUTION: &str = "Please get new token";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request has no usable `Authorization: Bearer` header.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Missing or malformed bearer credentials")]
    NotAuthenticated,

    /// Token failed signature or expiry verification.
    ///
    /// Results in a 403 Forbidden response asking the client to get a new token.
    #[error("Token failed verification")]
    InvalidToken,

    /// Token id is present in the blocklist.
    ///
    /// Results in a 403 Forbidden response asking the client to get a new token.
    #[error("Token {0} has been revoked")]
    RevokedToken(String),

    /// A refresh token was presented where an access token is required.
    #[error("Refresh token presented to access gate")]
    AccessTokenRequired,

    /// An access token was presented where a refresh token is required.
    #[error("Access token presented to refresh gate")]
    RefreshTokenRequired,

    /// Token refers to a user who no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(Uuid),

    /// User's role is outside the allowed set for the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} with role '{1}' denied access")]
    InsufficientPermission(Uuid, String),

    /// Login email is unknown or the password did not match.
    ///
    /// Results in a 403 Forbidden response without saying which part was wrong.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems carry a `resolution` hint telling the client to obtain a new token.
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
///
/// # Returns
/// - 403 Forbidden - For credential, token and permission failures
/// - 404 Not Found - For tokens referring to a deleted user
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, body) = match self {
            Self::NotAuthenticated => (StatusCode::FORBIDDEN, ErrorDto::new("Not authenticated")),
            Self::InvalidToken => (
                StatusCode::FORBIDDEN,
                ErrorDto::with_resolution("This token is invalid or expired", NEW_TOKEN_RESOLUTION),
            ),
            Self::RevokedToken(_) => (
                StatusCode::FORBIDDEN,
                ErrorDto::with_resolution(
                    "This token is invalid or has been revoked",
                    NEW_TOKEN_RESOLUTION,
                ),
            ),
            Self::AccessTokenRequired => (
                StatusCode::FORBIDDEN,
                ErrorDto::new("Please provide an access token"),
            ),
            Self::RefreshTokenRequired => (
                StatusCode::FORBIDDEN,
                ErrorDto::new("Please provide a refresh token"),
            ),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, ErrorDto::new("User not found")),
            Self::InsufficientPermission(_, _) => (
                StatusCode::FORBIDDEN,
                ErrorDto::new("You do not have enough permissions to perform this action"),
            ),
            Self::InvalidCredentials => (
                StatusCode::FORBIDDEN,
                ErrorDto::new("Invalid Email or Password"),
            ),
        };

        (status, Json(body)).into_response()
    }
}
