use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::server::record::ServerDisk;

/// Repository for the `server_disk` table.
pub struct ServerDiskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerDiskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches disk rows belonging to any of the given servers, ordered by id.
    ///
    /// An empty name set returns an empty list without querying the database.
    ///
    /// # Arguments
    /// - `system_names` - System names of the servers to fetch rows for
    ///
    /// # Returns
    /// - `Ok(Vec<ServerDisk>)` - Matching rows, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_system_names(
        &self,
        system_names: &[String],
    ) -> Result<Vec<ServerDisk>, DbErr> {
        if system_names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ServerDisk::find()
            .filter(entity::server_disk::Column::SystemName.is_in(system_names.iter().cloned()))
            .order_by_asc(entity::server_disk::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerDisk::from_entity).collect())
    }
}
