//! Joins base records with their relation rows and shapes the result for the API.

use indexmap::IndexMap;

use super::record::{
    ServerBasic, ServerDisk, ServerNetwork, ServerPartition, ServerRepository, SystemNamed,
};
use crate::{
    model::server::{
        DiskInfoDto, LicenseDto, NetworkInfoDto, PartitionInfoDto, RepositoryInfoDto,
        ServerBasicDto, ServerDetailDto, ServerDto,
    },
    server::util::convert::{format_disk_size, format_size_with_raw, format_usage, or_placeholder},
};

/// Relation rows fetched for one request; relations that were not requested stay empty.
#[derive(Debug, Clone, Default)]
pub struct ServerRelations {
    pub disks: Vec<ServerDisk>,
    pub networks: Vec<ServerNetwork>,
    pub partitions: Vec<ServerPartition>,
    pub repositories: Vec<ServerRepository>,
}

/// A base server record together with the relation rows that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedServer {
    pub server: ServerBasic,
    pub disks: Vec<ServerDisk>,
    pub networks: Vec<ServerNetwork>,
    pub partitions: Vec<ServerPartition>,
    pub repositories: Vec<ServerRepository>,
}

impl AggregatedServer {
    pub fn new(server: ServerBasic) -> Self {
        Self {
            server,
            disks: Vec::new(),
            networks: Vec::new(),
            partitions: Vec::new(),
            repositories: Vec::new(),
        }
    }

    /// Shapes the server into the basic or detailed view.
    ///
    /// # Arguments
    /// - `detail` - Whether the detailed view was requested
    ///
    /// # Returns
    /// - `ServerDto::Detail` when `detail` is set, `ServerDto::Basic` otherwise
    pub fn into_dto(self, detail: bool) -> ServerDto {
        if detail {
            ServerDto::Detail(self.into_detail_dto())
        } else {
            ServerDto::Basic(self.server.into_basic_dto())
        }
    }

    pub fn into_detail_dto(self) -> ServerDetailDto {
        let memory = format_disk_size(&self.server.total_physical_memory);

        ServerDetailDto {
            agent_version: self.server.agent_version.clone(),
            model: self.server.model.clone(),
            manufacturer: self.server.manufacturer.clone(),
            cpu: self.server.cpu_name.clone(),
            cpu_count: self.server.number_of_processors.clone(),
            memory,
            disk: present(self.disks, ServerDisk::into_dto),
            network: present(self.networks, ServerNetwork::into_dto),
            partition: present(self.partitions, ServerPartition::into_dto),
            repository: present(self.repositories, ServerRepository::into_dto),
            basic: self.server.into_basic_dto(),
        }
    }
}

/// Renders a relation array only when the server has rows for it.
fn present<T, D>(records: Vec<T>, into_dto: fn(T) -> D) -> Option<Vec<D>> {
    if records.is_empty() {
        None
    } else {
        Some(records.into_iter().map(into_dto).collect())
    }
}

impl ServerBasic {
    pub fn into_basic_dto(self) -> ServerBasicDto {
        ServerBasicDto {
            system_mode: self.system_mode.label().to_string(),
            os: self.os.label().to_string(),
            version: self.os_version,
            ip: self.ip_address,
            status: self.status,
            license_id: license_dto(self.license_id),
            system_name: self.system_name,
        }
    }
}

fn license_dto(license_id: i32) -> LicenseDto {
    if license_id == 0 {
        LicenseDto::Label("Unassigned".to_string())
    } else {
        LicenseDto::Assigned(license_id)
    }
}

impl ServerDisk {
    pub fn into_dto(self) -> DiskInfoDto {
        DiskInfoDto {
            device: self.device,
            disk_type: self.disk_type.label().to_string(),
            disk_size: format_size_with_raw(&self.disk_size),
            last_updated: or_placeholder(self.last_update_time, "Unknown"),
        }
    }
}

impl ServerNetwork {
    pub fn into_dto(self) -> NetworkInfoDto {
        NetworkInfoDto {
            name: self.network_name,
            ip_address: self.ip_address,
            subnet: self.subnet,
            gateway: self.gateway,
            mac_address: or_placeholder(self.mac_address, "-"),
            last_updated: or_placeholder(self.last_update_time, "Unknown"),
        }
    }
}

impl ServerPartition {
    pub fn into_dto(self) -> PartitionInfoDto {
        PartitionInfoDto {
            size: format_size_with_raw(&self.size.to_string()),
            used: format_size_with_raw(&self.used.to_string()),
            free: format_size_with_raw(&self.free.to_string()),
            usage: format_usage(self.used, self.size),
            letter: self.letter,
            device: self.device,
            file_system: self.file_system,
            last_updated: or_placeholder(self.last_update_time, "Unknown"),
        }
    }
}

impl ServerRepository {
    pub fn into_dto(self) -> RepositoryInfoDto {
        RepositoryInfoDto {
            repository_type: self.repository_type.label().to_string(),
            os: self.os.label().to_string(),
            used: format_disk_size(&self.used_size.to_string()),
            free: format_disk_size(&self.free_size.to_string()),
            local_path: self.local_path,
            remote_path: self.remote_path,
            ip_address: self.ip_address,
            last_updated: or_placeholder(self.last_update_time, "Unknown"),
        }
    }
}

/// Groups relation rows under their owning server.
///
/// Output order follows `servers`. Relation rows whose system name matches no base
/// record are dropped.
///
/// # Arguments
/// - `servers` - Base records in query order
/// - `relations` - Relation rows, possibly empty
///
/// # Returns
/// - `Vec<AggregatedServer>` - One entry per base record
pub fn assemble(servers: Vec<ServerBasic>, relations: ServerRelations) -> Vec<AggregatedServer> {
    let mut by_name: IndexMap<String, AggregatedServer> = servers
        .into_iter()
        .map(|server| (server.system_name.clone(), AggregatedServer::new(server)))
        .collect();

    attach(&mut by_name, relations.disks, |view| &mut view.disks);
    attach(&mut by_name, relations.networks, |view| &mut view.networks);
    attach(&mut by_name, relations.partitions, |view| &mut view.partitions);
    attach(&mut by_name, relations.repositories, |view| {
        &mut view.repositories
    });

    by_name.into_values().collect()
}

fn attach<T: SystemNamed>(
    by_name: &mut IndexMap<String, AggregatedServer>,
    records: Vec<T>,
    slot: fn(&mut AggregatedServer) -> &mut Vec<T>,
) {
    for record in records {
        if let Some(view) = by_name.get_mut(record.system_name()) {
            slot(view).push(record);
        }
    }
}
