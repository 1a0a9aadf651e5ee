//! Server inventory service.
//!
//! Reads the filtered base list, fetches the requested relation tables concurrently
//! for the servers found and joins everything into aggregated server views.

use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;

use crate::server::{
    data::server::{
        basic::ServerBasicRepository, disk::ServerDiskRepository,
        network::ServerNetworkRepository, partition::ServerPartitionRepository,
        repository::ServerRepositoryRepository,
    },
    error::{
        inventory::{InventoryError, RelationKind},
        AppError,
    },
    model::server::{
        aggregate::{assemble, AggregatedServer, ServerRelations},
        record::ServerBasic,
        ServerFilterOptions,
    },
};

/// Service providing the server listing and lookup operations.
pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    /// Creates a new ServerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the filter with the requested relations attached.
    ///
    /// # Arguments
    /// - `options` - Normalized filter and relation flags
    ///
    /// # Returns
    /// - `Ok(Vec<AggregatedServer>)` - Servers in id order, possibly empty
    /// - `Err(AppError::InventoryErr)` - Base or relation query failed
    pub async fn get_servers(
        &self,
        options: &ServerFilterOptions,
    ) -> Result<Vec<AggregatedServer>, AppError> {
        let servers = ServerBasicRepository::new(self.db)
            .find_all(options)
            .await
            .map_err(InventoryError::ServerQuery)?;

        self.with_relations(servers, options).await
    }

    /// Looks up one server by system name, honoring the filter and relation flags.
    ///
    /// # Arguments
    /// - `system_name` - Exact system name
    /// - `options` - Normalized filter and relation flags
    ///
    /// # Returns
    /// - `Ok(Vec<AggregatedServer>)` - The matching server
    /// - `Err(AppError::InventoryErr(ServerNotFound))` - No server matched
    /// - `Err(AppError::InventoryErr)` - Base or relation query failed
    pub async fn get_server_by_name(
        &self,
        system_name: &str,
        options: &ServerFilterOptions,
    ) -> Result<Vec<AggregatedServer>, AppError> {
        let servers = ServerBasicRepository::new(self.db)
            .find_by_system_name(system_name, options)
            .await
            .map_err(InventoryError::ServerQuery)?;

        if servers.is_empty() {
            return Err(InventoryError::ServerNotFound(system_name.to_string()).into());
        }

        self.with_relations(servers, options).await
    }

    /// Fetches the flagged relations for `servers` and assembles the result.
    ///
    /// All fetches run concurrently; if any fails the whole call fails.
    async fn with_relations(
        &self,
        servers: Vec<ServerBasic>,
        options: &ServerFilterOptions,
    ) -> Result<Vec<AggregatedServer>, AppError> {
        let names: Vec<String> = servers.iter().map(|s| s.system_name.clone()).collect();

        let disk_repo = ServerDiskRepository::new(self.db);
        let network_repo = ServerNetworkRepository::new(self.db);
        let partition_repo = ServerPartitionRepository::new(self.db);
        let repository_repo = ServerRepositoryRepository::new(self.db);

        let (disks, networks, partitions, repositories) = tokio::try_join!(
            fetch_relation(
                options.disk,
                RelationKind::Disk,
                disk_repo.find_by_system_names(&names)
            ),
            fetch_relation(
                options.network,
                RelationKind::Network,
                network_repo.find_by_system_names(&names)
            ),
            fetch_relation(
                options.partition,
                RelationKind::Partition,
                partition_repo.find_by_system_names(&names)
            ),
            fetch_relation(
                options.repository,
                RelationKind::Repository,
                repository_repo.find_by_system_names(&names)
            ),
        )?;

        tracing::debug!(
            "Assembling {} servers with {} disks, {} networks, {} partitions, {} repositories",
            servers.len(),
            disks.len(),
            networks.len(),
            partitions.len(),
            repositories.len()
        );

        Ok(assemble(
            servers,
            ServerRelations {
                disks,
                networks,
                partitions,
                repositories,
            },
        ))
    }
}

/// Awaits `query` only when the relation was requested.
async fn fetch_relation<T>(
    requested: bool,
    kind: RelationKind,
    query: impl Future<Output = Result<Vec<T>, DbErr>>,
) -> Result<Vec<T>, InventoryError> {
    if !requested {
        return Ok(Vec::new());
    }

    query
        .await
        .map_err(|source| InventoryError::RelationQuery { kind, source })
}
