//! User account domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, EmailQuery, LoginDto, UpdateUserDto, UserDto},
    server::middleware::validation::{
        validate_email, validate_length, validate_password, Validate,
    },
};

/// User account as stored, including the salted password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// `<salt>:<digest>`, never rendered.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub login_failures: i32,
}

impl User {
    pub fn from_entity(entity: entity::user_info::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            last_login_at: entity.last_login_at,
            login_failures: entity.login_failures,
        }
    }

    /// Converts to the API representation, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Parameters for inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial user update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl Validate for CreateUserDto {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate_length("name", &self.name, 2, 100, &mut errors);
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, false, &mut errors);
        errors
    }
}

impl Validate for UpdateUserDto {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_none() && self.email.is_none() && self.password.is_none() {
            errors.push("at least one field must be provided".to_string());
        }
        if let Some(name) = &self.name {
            validate_length("name", name, 2, 100, &mut errors);
        }
        if let Some(email) = &self.email {
            validate_email(email, &mut errors);
        }
        if let Some(password) = &self.password {
            validate_password(password, false, &mut errors);
        }
        errors
    }
}

impl Validate for LoginDto {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.push("password is required".to_string());
        }
        errors
    }
}

impl Validate for EmailQuery {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate_email(&self.email, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_valid_fields() {
        let dto = CreateUserDto {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        assert_eq!(dto.validate().len(), 3);
    }

    #[test]
    fn create_accepts_valid_fields() {
        let dto = CreateUserDto {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password1".to_string(),
        };

        assert!(dto.validate().is_empty());
    }

    #[test]
    fn empty_update_is_rejected() {
        assert_eq!(UpdateUserDto::default().validate().len(), 1);
    }
}
