//! User service for business logic.
//!
//! Enforces email uniqueness, hashes passwords before they reach the repository and
//! performs the credential check for login.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, LoginDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::{account::AccountError, AppError},
        model::user::{CreateUserParams, UpdateUserParams, User},
        util::crypto::{hash_password, verify_password},
    },
};

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).find_all().await?)
    }

    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::AccountErr(UserNotFound))` - No user with that id
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::UserNotFound(id).into())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::UserEmailNotFound(email.to_string()).into())
    }

    /// Creates a user after checking that the email is free.
    ///
    /// # Arguments
    /// - `dto` - Validated creation payload with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AccountErr(EmailAlreadyExists))` - Email is taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AccountError::EmailAlreadyExists(dto.email).into());
        }

        let user = repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash: hash_password(&dto.password),
            })
            .await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Applies a partial update.
    ///
    /// A new email must not belong to another user; a new password is re-hashed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::AccountErr(UserNotFound))` - No user with that id
    /// - `Err(AppError::AccountErr(EmailAlreadyExists))` - Email belongs to another user
    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(email) = &dto.email {
            if let Some(owner) = repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(AccountError::EmailAlreadyExists(email.clone()).into());
                }
            }
        }

        let param = UpdateUserParams {
            name: dto.name,
            email: dto.email,
            password_hash: dto.password.as_deref().map(hash_password),
        };

        repo.update(id, param)
            .await?
            .ok_or_else(|| AccountError::UserNotFound(id).into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AccountError::UserNotFound(id).into());
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    /// Checks credentials and records the outcome.
    ///
    /// Unknown email and wrong password produce the same error. A wrong password
    /// increments the user's failure counter; success clears it and stamps the
    /// login time.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user with updated login columns
    /// - `Err(AppError::AccountErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&dto.email).await? else {
            return Err(AccountError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &user.password_hash) {
            repo.record_login_failure(user.id).await?;
            tracing::warn!("Failed login attempt for user {}", user.id);
            return Err(AccountError::InvalidCredentials.into());
        }

        repo.record_login(user.id).await?;

        repo.find_by_id(user.id)
            .await?
            .ok_or_else(|| AccountError::InvalidCredentials.into())
    }
}
