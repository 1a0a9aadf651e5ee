use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AccountError {
    /// Email is already registered to a user or business.
    #[error("Email '{0}' is already in use")]
    EmailAlreadyExists(String),

    /// Unknown email or wrong password. Both produce the same message.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Business number fails the format, checksum or uniqueness check.
    #[error("Business number '{0}' is not valid")]
    InvalidBusinessNumber(String),

    /// Business number is already registered.
    #[error("Business number '{0}' is already registered")]
    BusinessNumberAlreadyExists(String),

    #[error("User with id {0} not found")]
    UserNotFound(i32),

    #[error("User with email '{0}' not found")]
    UserEmailNotFound(String),

    #[error("Business with id {0} not found")]
    BusinessNotFound(i32),
}

/// Converts account errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidBusinessNumber`
/// - 401 Unauthorized - For `InvalidCredentials`
/// - 404 Not Found - For missing users or businesses
/// - 409 Conflict - For an email or business number that is already registered
impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::EmailAlreadyExists(_) | Self::BusinessNumberAlreadyExists(_) => {
                (StatusCode::CONFLICT, "CONFLICT")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            Self::InvalidBusinessNumber(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::UserNotFound(_) | Self::UserEmailNotFound(_) | Self::BusinessNotFound(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto::new(code, self.to_string()))).into_response()
    }
}
