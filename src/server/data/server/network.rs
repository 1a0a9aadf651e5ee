use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::server::record::ServerNetwork;

/// Repository for the `server_network` table.
pub struct ServerNetworkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerNetworkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches network interface rows belonging to any of the given servers, ordered by id.
    ///
    /// An empty name set returns an empty list without querying the database.
    ///
    /// # Arguments
    /// - `system_names` - System names of the servers to fetch rows for
    ///
    /// # Returns
    /// - `Ok(Vec<ServerNetwork>)` - Matching rows, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_system_names(
        &self,
        system_names: &[String],
    ) -> Result<Vec<ServerNetwork>, DbErr> {
        if system_names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ServerNetwork::find()
            .filter(entity::server_network::Column::SystemName.is_in(system_names.iter().cloned()))
            .order_by_asc(entity::server_network::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerNetwork::from_entity).collect())
    }
}
