//! Business account service.

use sea_orm::DatabaseConnection;

use crate::{
    model::business::{CreateBusinessDto, UpdateBusinessDto},
    server::{
        data::{business::BusinessRepository, user::UserRepository},
        error::{account::AccountError, AppError},
        model::business::{
            Business, CreateBusinessParams, UpdateBusinessParams, STATUS_INACTIVE,
        },
        util::{business_number, crypto::hash_password},
    },
};

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks format, checksum and that the number is not yet registered.
    ///
    /// # Arguments
    /// - `value` - Business number as `ddd-dd-ddddd`
    ///
    /// # Returns
    /// - `Ok(true)` - The number can be registered
    /// - `Ok(false)` - Malformed, wrong checksum or already registered
    /// - `Err(AppError::DbErr)` - Database error during the uniqueness check
    pub async fn validate_business_number(&self, value: &str) -> Result<bool, AppError> {
        if !business_number::is_valid(value) {
            return Ok(false);
        }

        let existing = BusinessRepository::new(self.db)
            .find_by_business_number(value)
            .await?;

        Ok(existing.is_none())
    }

    /// Registers a business account with its address.
    ///
    /// # Arguments
    /// - `dto` - Validated registration payload with the plaintext password
    ///
    /// # Returns
    /// - `Ok(Business)` - The registered business, status `ACTIVE`
    /// - `Err(AppError::AccountErr(InvalidBusinessNumber))` - Checksum failed
    /// - `Err(AppError::AccountErr(BusinessNumberAlreadyExists))` - Number taken
    /// - `Err(AppError::AccountErr(EmailAlreadyExists))` - Email used by a user or business
    pub async fn register(&self, dto: CreateBusinessDto) -> Result<Business, AppError> {
        let repo = BusinessRepository::new(self.db);

        if !business_number::is_valid(&dto.business_number) {
            return Err(AccountError::InvalidBusinessNumber(dto.business_number).into());
        }
        if repo
            .find_by_business_number(&dto.business_number)
            .await?
            .is_some()
        {
            return Err(AccountError::BusinessNumberAlreadyExists(dto.business_number).into());
        }
        if self.email_in_use(&dto.email, None).await? {
            return Err(AccountError::EmailAlreadyExists(dto.email).into());
        }

        let password_hash = hash_password(&dto.password);
        let business = repo
            .create(CreateBusinessParams::from_dto(dto, password_hash))
            .await?;

        tracing::info!(
            "Registered business {} ({})",
            business.id,
            business.business_number
        );

        Ok(business)
    }

    pub async fn get_all(&self) -> Result<Vec<Business>, AppError> {
        Ok(BusinessRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Business, AppError> {
        BusinessRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::BusinessNotFound(id).into())
    }

    /// Applies a partial update to the account and its address.
    ///
    /// # Returns
    /// - `Ok(Business)` - The updated business
    /// - `Err(AppError::AccountErr(BusinessNotFound))` - No business with that id
    /// - `Err(AppError::AccountErr(EmailAlreadyExists))` - Email used elsewhere
    pub async fn update(&self, id: i32, dto: UpdateBusinessDto) -> Result<Business, AppError> {
        if let Some(email) = &dto.email {
            if self.email_in_use(email, Some(id)).await? {
                return Err(AccountError::EmailAlreadyExists(email.clone()).into());
            }
        }

        let password_hash = dto.password.as_deref().map(hash_password);

        BusinessRepository::new(self.db)
            .update(id, UpdateBusinessParams::from_dto(dto, password_hash))
            .await?
            .ok_or_else(|| AccountError::BusinessNotFound(id).into())
    }

    /// Marks the business `INACTIVE`; the row is kept.
    pub async fn deactivate(&self, id: i32) -> Result<Business, AppError> {
        let business = BusinessRepository::new(self.db)
            .update(
                id,
                UpdateBusinessParams {
                    status: Some(STATUS_INACTIVE.to_string()),
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::from(AccountError::BusinessNotFound(id)))?;

        tracing::info!("Deactivated business {}", id);

        Ok(business)
    }

    /// True when a user, or a business other than `except_business`, owns the email.
    async fn email_in_use(
        &self,
        email: &str,
        except_business: Option<i32>,
    ) -> Result<bool, AppError> {
        if UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .is_some()
        {
            return Ok(true);
        }

        let owner = BusinessRepository::new(self.db).find_by_email(email).await?;

        Ok(owner.is_some_and(|business| Some(business.id) != except_business))
    }
}
