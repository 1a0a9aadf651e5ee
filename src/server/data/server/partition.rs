use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::server::record::ServerPartition;

/// Repository for the `server_partition` table.
pub struct ServerPartitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerPartitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Partition rows for the given servers, ordered by id. Empty input skips the query.
    pub async fn find_by_system_names(
        &self,
        system_names: &[String],
    ) -> Result<Vec<ServerPartition>, DbErr> {
        if system_names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ServerPartition::find()
            .filter(entity::server_partition::Column::SystemName.is_in(system_names.iter().cloned()))
            .order_by_asc(entity::server_partition::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerPartition::from_entity).collect())
    }
}
