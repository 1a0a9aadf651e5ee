//! User data repository for database operations.
//!
//! Handles user creation, updates, deletion and login bookkeeping with conversion
//! between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with the current time as creation and update timestamp.
    ///
    /// # Arguments
    /// - `param` - Name, email and hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user_info::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(None),
            login_failures: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Lists all users ordered by id.
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::UserInfo::find()
            .order_by_asc(entity::user_info::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::UserInfo::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::UserInfo::find()
            .filter(entity::user_info::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `param` - Columns to change; `None` fields are left as stored
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::UserInfo::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = existing.into_active_model();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active_model.password = ActiveValue::Set(password_hash);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserInfo::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records a successful login: sets `last_login_at` and clears the failure counter.
    pub async fn record_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::UserInfo::update_many()
            .filter(entity::user_info::Column::Id.eq(id))
            .col_expr(
                entity::user_info::Column::LastLoginAt,
                Expr::value(Utc::now()),
            )
            .col_expr(entity::user_info::Column::LoginFailures, Expr::value(0))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Increments the failed login counter.
    pub async fn record_login_failure(&self, id: i32) -> Result<(), DbErr> {
        let Some(existing) = entity::prelude::UserInfo::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let failures = existing.login_failures + 1;
        let mut active_model = existing.into_active_model();
        active_model.login_failures = ActiveValue::Set(failures);
        active_model.update(self.db).await?;

        Ok(())
    }
}
