//! Business account repository.
//!
//! An account and its address are always written together inside one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use crate::server::model::business::{
    Business, CreateBusinessParams, UpdateBusinessParams, STATUS_ACTIVE,
};

pub struct BusinessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an account and its address atomically with status `ACTIVE`.
    ///
    /// # Arguments
    /// - `param` - Account and address columns with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Business)` - The registered business with its address
    /// - `Err(DbErr)` - Either insert failed; nothing was written
    pub async fn create(&self, param: CreateBusinessParams) -> Result<Business, DbErr> {
        self.db
            .transaction::<_, Business, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();

                    let account = entity::business_account::ActiveModel {
                        company_name: ActiveValue::Set(param.company_name),
                        business_number: ActiveValue::Set(param.business_number),
                        email: ActiveValue::Set(param.email),
                        password: ActiveValue::Set(param.password_hash),
                        industry_type: ActiveValue::Set(param.industry_type.as_str().to_string()),
                        employee_count: ActiveValue::Set(param.employee_count),
                        founding_year: ActiveValue::Set(param.founding_year),
                        status: ActiveValue::Set(STATUS_ACTIVE.to_string()),
                        marketing_consent: ActiveValue::Set(param.marketing_consent),
                        data_processing_consent: ActiveValue::Set(param.data_processing_consent),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    let address = entity::business_address::ActiveModel {
                        business_id: ActiveValue::Set(account.id),
                        street: ActiveValue::Set(param.address.street),
                        city: ActiveValue::Set(param.address.city),
                        state: ActiveValue::Set(param.address.state),
                        zip_code: ActiveValue::Set(param.address.zip_code),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    Ok(Business::from_entity(account, Some(address)))
                })
            })
            .await
            .map_err(flatten_transaction_error)
    }

    /// Lists all businesses with their addresses ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Business>, DbErr> {
        let rows = entity::prelude::BusinessAccount::find()
            .find_also_related(entity::prelude::BusinessAddress)
            .order_by_asc(entity::business_account::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(account, address)| Business::from_entity(account, address))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Business>, DbErr> {
        let row = entity::prelude::BusinessAccount::find_by_id(id)
            .find_also_related(entity::prelude::BusinessAddress)
            .one(self.db)
            .await?;

        Ok(row.map(|(account, address)| Business::from_entity(account, address)))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Business>, DbErr> {
        let row = entity::prelude::BusinessAccount::find()
            .filter(entity::business_account::Column::Email.eq(email))
            .find_also_related(entity::prelude::BusinessAddress)
            .one(self.db)
            .await?;

        Ok(row.map(|(account, address)| Business::from_entity(account, address)))
    }

    pub async fn find_by_business_number(
        &self,
        business_number: &str,
    ) -> Result<Option<Business>, DbErr> {
        let row = entity::prelude::BusinessAccount::find()
            .filter(entity::business_account::Column::BusinessNumber.eq(business_number))
            .find_also_related(entity::prelude::BusinessAddress)
            .one(self.db)
            .await?;

        Ok(row.map(|(account, address)| Business::from_entity(account, address)))
    }

    /// Applies a partial update to the account and, when given, its address.
    ///
    /// Both writes share one transaction.
    ///
    /// # Arguments
    /// - `id` - Business account id
    /// - `param` - Columns to change; `None` fields are left as stored
    ///
    /// # Returns
    /// - `Ok(Some(Business))` - The updated business
    /// - `Ok(None)` - No business with that id
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn update(
        &self,
        id: i32,
        param: UpdateBusinessParams,
    ) -> Result<Option<Business>, DbErr> {
        self.db
            .transaction::<_, Option<Business>, DbErr>(|txn| {
                Box::pin(async move { update_in_transaction(txn, id, param).await })
            })
            .await
            .map_err(flatten_transaction_error)
    }
}

async fn update_in_transaction(
    txn: &DatabaseTransaction,
    id: i32,
    param: UpdateBusinessParams,
) -> Result<Option<Business>, DbErr> {
    let Some(existing) = entity::prelude::BusinessAccount::find_by_id(id).one(txn).await? else {
        return Ok(None);
    };
    let has_address_changes = param.has_address_changes();

    let mut account = existing.into_active_model();
    if let Some(company_name) = param.company_name {
        account.company_name = ActiveValue::Set(company_name);
    }
    if let Some(email) = param.email {
        account.email = ActiveValue::Set(email);
    }
    if let Some(password_hash) = param.password_hash {
        account.password = ActiveValue::Set(password_hash);
    }
    if let Some(industry_type) = param.industry_type {
        account.industry_type = ActiveValue::Set(industry_type.as_str().to_string());
    }
    if let Some(employee_count) = param.employee_count {
        account.employee_count = ActiveValue::Set(employee_count);
    }
    if let Some(founding_year) = param.founding_year {
        account.founding_year = ActiveValue::Set(founding_year);
    }
    if let Some(marketing_consent) = param.marketing_consent {
        account.marketing_consent = ActiveValue::Set(marketing_consent);
    }
    if let Some(status) = param.status {
        account.status = ActiveValue::Set(status);
    }
    account.updated_at = ActiveValue::Set(Utc::now());
    let account = account.update(txn).await?;

    let mut address = entity::prelude::BusinessAddress::find()
        .filter(entity::business_address::Column::BusinessId.eq(id))
        .one(txn)
        .await?;

    if has_address_changes {
        if let Some(existing) = address.take() {
            let mut active_address = existing.into_active_model();
            if let Some(street) = param.street {
                active_address.street = ActiveValue::Set(street);
            }
            if let Some(city) = param.city {
                active_address.city = ActiveValue::Set(city);
            }
            if let Some(state) = param.state {
                active_address.state = ActiveValue::Set(state);
            }
            if let Some(zip_code) = param.zip_code {
                active_address.zip_code = ActiveValue::Set(zip_code);
            }
            address = Some(active_address.update(txn).await?);
        }
    }

    Ok(Some(Business::from_entity(account, address)))
}

fn flatten_transaction_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(err) => err,
        TransactionError::Transaction(err) => err,
    }
}
