//! Request validation extractors.
//!
//! `ValidatedQuery` and `ValidatedJson` wrap axum's `Query` and `Json` extractors and
//! run the payload's [`Validate`] implementation before the handler is invoked. Any
//! reported problem rejects the request with `400 VALIDATION_ERROR` listing every message,
//! unless `AppState::expose_error_details` is off, in which case the messages are only
//! logged.

use axum::{
    extract::{FromRef, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

use crate::server::{error::AppError, state::AppState};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("valid zip code pattern"));
static SPECIAL_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid special character pattern"));

const MIN_PASSWORD_LENGTH: usize = 8;

/// Payloads that can report field problems.
pub trait Validate {
    /// Returns one message per problem; empty when the payload is acceptable.
    fn validate(&self) -> Vec<String>;
}

/// Query string extractor that validates before handing the value to the handler.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        check(value, AppState::from_ref(state).expose_error_details).map(Self)
    }
}

/// JSON body extractor that validates before handing the value to the handler.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        check(value, AppState::from_ref(state).expose_error_details).map(Self)
    }
}

fn check<T: Validate>(value: T, expose_details: bool) -> Result<T, AppError> {
    let errors = value.validate();
    if errors.is_empty() {
        return Ok(value);
    }

    if expose_details {
        Err(AppError::Validation(errors))
    } else {
        tracing::warn!("Validation failed: {:?}", errors);
        Err(AppError::Validation(Vec::new()))
    }
}

pub fn validate_length(field: &str, value: &str, min: usize, max: usize, errors: &mut Vec<String>) {
    let length = value.chars().count();
    if length < min || length > max {
        errors.push(format!(
            "{} must be between {} and {} characters",
            field, min, max
        ));
    }
}

pub fn validate_email(value: &str, errors: &mut Vec<String>) {
    if !EMAIL.is_match(value) {
        errors.push("email must be a valid email address".to_string());
    }
}

/// Minimum length always; `strong` additionally requires upper, lower, digit and special.
pub fn validate_password(value: &str, strong: bool, errors: &mut Vec<String>) {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
        return;
    }

    if strong
        && !(value.chars().any(|c| c.is_ascii_uppercase())
            && value.chars().any(|c| c.is_ascii_lowercase())
            && value.chars().any(|c| c.is_ascii_digit())
            && SPECIAL_CHARACTER.is_match(value))
    {
        errors.push(
            "password must contain upper and lower case letters, a digit and a special character"
                .to_string(),
        );
    }
}

pub fn validate_zip_code(value: &str, errors: &mut Vec<String>) {
    if !ZIP_CODE.is_match(value) {
        errors.push("zipCode must be 5 digits".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name(&'static str);

    impl Validate for Name {
        fn validate(&self) -> Vec<String> {
            let mut errors = Vec::new();
            validate_length("name", self.0, 2, 100, &mut errors);
            errors
        }
    }

    #[test]
    fn check_lists_details_when_exposed() {
        match check(Name("x"), true) {
            Err(AppError::Validation(details)) => {
                assert_eq!(details, vec!["name must be between 2 and 100 characters"])
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn check_withholds_details_when_hidden() {
        match check(Name("x"), false) {
            Err(AppError::Validation(details)) => assert!(details.is_empty()),
            _ => panic!("expected a validation error"),
        }
        assert!(check(Name("ok"), false).is_ok());
    }

    #[test]
    fn email_shape() {
        let mut errors = Vec::new();
        validate_email("user@example.com", &mut errors);
        assert!(errors.is_empty());

        validate_email("user@example", &mut errors);
        validate_email("user example@test.com", &mut errors);
        validate_email("@example.com", &mut errors);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn strong_password_rules() {
        let mut errors = Vec::new();
        validate_password("Secret#123", true, &mut errors);
        validate_password("password1", false, &mut errors);
        assert!(errors.is_empty());

        validate_password("password1", true, &mut errors);
        validate_password("Sh#1", true, &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn length_counts_characters() {
        let mut errors = Vec::new();
        validate_length("name", "김철수", 2, 100, &mut errors);
        assert!(errors.is_empty());

        validate_length("name", "x", 2, 100, &mut errors);
        assert_eq!(errors, vec!["name must be between 2 and 100 characters"]);
    }
}
