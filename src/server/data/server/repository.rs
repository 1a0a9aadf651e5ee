use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::server::record::ServerRepository;

/// Repository for the `server_repository` table.
pub struct ServerRepositoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepositoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Backup repository rows for the given servers, ordered by id.
    ///
    /// Returns early with an empty list when `system_names` is empty.
    pub async fn find_by_system_names(
        &self,
        system_names: &[String],
    ) -> Result<Vec<ServerRepository>, DbErr> {
        if system_names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ServerRepository::find()
            .filter(entity::server_repository::Column::SystemName.is_in(system_names.iter().cloned()))
            .order_by_asc(entity::server_repository::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerRepository::from_entity).collect())
    }
}
