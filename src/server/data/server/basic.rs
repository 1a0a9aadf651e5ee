//! Base server record queries.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::server::{
    kind::LicenseFilter, record::ServerBasic, ServerFilterOptions,
};

/// Predicates collected for a single query.
///
/// Built fresh for every call so concurrent requests never share filter state.
#[derive(Debug, Default)]
pub struct FilterConditions {
    condition: Option<Condition>,
}

impl FilterConditions {
    /// Collects the OS, state and license predicates the options ask for.
    pub fn from_options(options: &ServerFilterOptions) -> Self {
        let mut conditions = Self::default();

        if let Some(code) = options.os_code() {
            conditions.push(entity::server_basic::Column::Os.eq(code));
        }
        if !options.state.is_empty() {
            conditions.push(entity::server_basic::Column::Status.eq(options.state.as_str()));
        }
        match options.license_filter() {
            Some(LicenseFilter::Assigned) => {
                conditions.push(entity::server_basic::Column::LicenseId.gt(0))
            }
            Some(LicenseFilter::Unassigned) => {
                conditions.push(entity::server_basic::Column::LicenseId.eq(0))
            }
            None => {}
        }

        conditions
    }

    pub fn push<C>(&mut self, predicate: C)
    where
        C: Into<Condition>,
    {
        let condition = self.condition.take().unwrap_or_else(Condition::all);
        self.condition = Some(condition.add(predicate));
    }

    pub fn is_empty(&self) -> bool {
        self.condition.is_none()
    }

    /// Applies the collected predicates (AND); adds no WHERE clause when there are none.
    pub fn apply<E: EntityTrait>(self, select: Select<E>) -> Select<E> {
        match self.condition {
            Some(condition) => select.filter(condition),
            None => select,
        }
    }
}

/// Repository for the `server_basic` table.
pub struct ServerBasicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerBasicRepository<'a> {
    /// Creates a new ServerBasicRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerBasicRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the filter, ordered by id.
    ///
    /// # Arguments
    /// - `options` - Normalized filter; empty fields add no predicate
    ///
    /// # Returns
    /// - `Ok(Vec<ServerBasic>)` - Matching servers, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self, options: &ServerFilterOptions) -> Result<Vec<ServerBasic>, DbErr> {
        let entities = Self::filtered(options)
            .order_by_asc(entity::server_basic::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerBasic::from_entity).collect())
    }

    /// Lists servers with the given system name that also match the filter.
    ///
    /// # Arguments
    /// - `system_name` - Exact system name to match
    /// - `options` - Normalized filter applied on top of the name
    ///
    /// # Returns
    /// - `Ok(Vec<ServerBasic>)` - Zero or one matching server
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_system_name(
        &self,
        system_name: &str,
        options: &ServerFilterOptions,
    ) -> Result<Vec<ServerBasic>, DbErr> {
        let entities = Self::filtered(options)
            .filter(entity::server_basic::Column::SystemName.eq(system_name))
            .order_by_asc(entity::server_basic::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerBasic::from_entity).collect())
    }

    /// Base select with the filter's predicates applied.
    pub fn filtered(options: &ServerFilterOptions) -> Select<entity::prelude::ServerBasic> {
        FilterConditions::from_options(options).apply(entity::prelude::ServerBasic::find())
    }
}
