//! Business account factory for creating accounts together with their address.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating business accounts with customizable fields.
///
/// `build()` inserts the `business_account` row followed by its
/// `business_address` row and returns both.
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    company_name: String,
    business_number: String,
    email: String,
    status: String,
}

impl<'a> BusinessFactory<'a> {
    /// Creates a new BusinessFactory with default values.
    ///
    /// Defaults:
    /// - company_name: `"Company {id}"`
    /// - business_number: `"{id:03}-00-00000"` (unique, not checksum-valid)
    /// - email: `"business{id}@example.com"`
    /// - status: `"ACTIVE"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            company_name: format!("Company {}", id),
            business_number: format!("{:03}-00-{:05}", id % 1000, id),
            email: format!("business{}@example.com", id),
            status: "ACTIVE".to_string(),
        }
    }

    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn business_number(mut self, business_number: impl Into<String>) -> Self {
        self.business_number = business_number.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the account and its address.
    ///
    /// # Returns
    /// - `Ok((account, address))` - Created entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<
        (
            entity::business_account::Model,
            entity::business_address::Model,
        ),
        DbErr,
    > {
        let now = Utc::now();
        let account = entity::business_account::ActiveModel {
            company_name: ActiveValue::Set(self.company_name),
            business_number: ActiveValue::Set(self.business_number),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set("00:00".to_string()),
            industry_type: ActiveValue::Set("tech".to_string()),
            employee_count: ActiveValue::Set(10),
            founding_year: ActiveValue::Set(2010),
            status: ActiveValue::Set(self.status),
            marketing_consent: ActiveValue::Set(false),
            data_processing_consent: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let address = entity::business_address::ActiveModel {
            business_id: ActiveValue::Set(account.id),
            street: ActiveValue::Set("123 Teheran-ro".to_string()),
            city: ActiveValue::Set("Seoul".to_string()),
            state: ActiveValue::Set("Gangnam-gu".to_string()),
            zip_code: ActiveValue::Set("06236".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((account, address))
    }
}

/// Creates a business account with default values.
pub async fn create_business(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::business_account::Model,
        entity::business_address::Model,
    ),
    DbErr,
> {
    BusinessFactory::new(db).build().await
}
