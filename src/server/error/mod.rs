//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so
//! handlers can return it directly. Every response body uses the `ErrorDto` envelope.

pub mod account;
pub mod config;
pub mod inventory;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{account::AccountError, config::ConfigError, inventory::InventoryError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors handle their own
/// response mapping, while the generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Server inventory query error.
    ///
    /// Delegates to `InventoryError::into_response()` (404 or 500).
    #[error(transparent)]
    InventoryErr(#[from] InventoryError),

    /// User or business account error.
    ///
    /// Delegates to `AccountError::into_response()` (400, 401, 404 or 409).
    #[error(transparent)]
    AccountErr(#[from] AccountError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 with the details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request payload failed validation.
    ///
    /// Results in 400 Bad Request with every message listed under `details`; an empty
    /// list omits `details`.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request, e.g. a query string or body that does not deserialize.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For database, configuration and internal errors
/// - Variable - For `InventoryErr` and `AccountErr`, delegated to their own mapping
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InventoryErr(err) => err.into_response(),
            Self::AccountErr(err) => err.into_response(),
            Self::Validation(details) => {
                let mut body = ErrorDto::new("VALIDATION_ERROR", "Request validation failed");
                if !details.is_empty() {
                    tracing::debug!("Validation failed: {:?}", details);
                    body = body.with_details(details);
                }
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("VALIDATION_ERROR", msg)),
            )
                .into_response(),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("NOT_FOUND", msg)),
            )
                .into_response(),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("DATABASE_ERROR", "Database operation failed")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("INTERNAL_ERROR", "Internal server error")),
        )
            .into_response()
    }
}
