//! Inventory records as read from storage.
//!
//! Each record is converted from its entity model at the repository boundary, with
//! numeric code columns decoded into their enums.

use super::kind::{DiskType, OsType, RepositoryType, SystemMode};

/// Records that belong to a server through its system name.
pub trait SystemNamed {
    fn system_name(&self) -> &str;
}

/// Base server record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerBasic {
    pub id: i32,
    pub system_name: String,
    pub system_name_display: String,
    pub system_mode: SystemMode,
    pub os: OsType,
    pub os_version: String,
    pub agent_version: String,
    pub ip_address: String,
    pub model: String,
    pub manufacturer: String,
    pub cpu_name: String,
    pub number_of_processors: String,
    /// Byte count stored as text.
    pub total_physical_memory: String,
    pub status: String,
    /// 0 means no license is assigned.
    pub license_id: i32,
    pub last_update_time: String,
}

impl ServerBasic {
    pub fn from_entity(entity: entity::server_basic::Model) -> Self {
        Self {
            id: entity.id,
            system_name: entity.system_name,
            system_name_display: entity.system_name_display,
            system_mode: SystemMode::from_code(entity.system_mode),
            os: OsType::from_code(entity.os),
            os_version: entity.os_version,
            agent_version: entity.agent_version,
            ip_address: entity.ip_address,
            model: entity.model,
            manufacturer: entity.manufacturer,
            cpu_name: entity.cpu_name,
            number_of_processors: entity.number_of_processors,
            total_physical_memory: entity.total_physical_memory,
            status: entity.status,
            license_id: entity.license_id,
            last_update_time: entity.last_update_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerDisk {
    pub id: i32,
    pub system_name: String,
    pub disk_type: DiskType,
    pub disk_num: i32,
    pub disk_size: String,
    pub device: String,
    pub last_update_time: String,
}

impl ServerDisk {
    pub fn from_entity(entity: entity::server_disk::Model) -> Self {
        Self {
            id: entity.id,
            system_name: entity.system_name,
            disk_type: DiskType::from_code(entity.disk_type),
            disk_num: entity.disk_num,
            disk_size: entity.disk_size,
            device: entity.device,
            last_update_time: entity.last_update_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerNetwork {
    pub id: i32,
    pub system_name: String,
    pub network_name: String,
    pub ip_address: String,
    pub subnet: String,
    pub gateway: String,
    pub mac_address: String,
    pub last_update_time: String,
}

impl ServerNetwork {
    pub fn from_entity(entity: entity::server_network::Model) -> Self {
        Self {
            id: entity.id,
            system_name: entity.system_name,
            network_name: entity.network_name,
            ip_address: entity.ip_address,
            subnet: entity.subnet,
            gateway: entity.gateway,
            mac_address: entity.mac_address,
            last_update_time: entity.last_update_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerPartition {
    pub id: i32,
    pub system_name: String,
    pub disk_num: i32,
    pub partition_num: i32,
    pub size: i64,
    pub used: i64,
    pub free: i64,
    pub letter: String,
    pub device: String,
    pub file_system: String,
    pub last_update_time: String,
}

impl ServerPartition {
    pub fn from_entity(entity: entity::server_partition::Model) -> Self {
        Self {
            id: entity.id,
            system_name: entity.system_name,
            disk_num: entity.disk_num,
            partition_num: entity.partition_num,
            size: entity.size,
            used: entity.used,
            free: entity.free,
            letter: entity.letter,
            device: entity.device,
            file_system: entity.file_system,
            last_update_time: entity.last_update_time,
        }
    }
}

/// Backup repository attached to a server.
///
/// Remote credentials stay in storage and are not carried into the domain model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerRepository {
    pub id: i32,
    pub system_name: String,
    pub os: OsType,
    pub repository_type: RepositoryType,
    pub used_size: i64,
    pub free_size: i64,
    pub local_path: String,
    pub remote_path: String,
    pub ip_address: String,
    pub last_update_time: String,
}

impl ServerRepository {
    pub fn from_entity(entity: entity::server_repository::Model) -> Self {
        Self {
            id: entity.id,
            system_name: entity.system_name,
            os: OsType::from_code(entity.os),
            repository_type: RepositoryType::from_code(entity.repository_type),
            used_size: entity.used_size,
            free_size: entity.free_size,
            local_path: entity.local_path,
            remote_path: entity.remote_path,
            ip_address: entity.ip_address,
            last_update_time: entity.last_update_time,
        }
    }
}

impl SystemNamed for ServerDisk {
    fn system_name(&self) -> &str {
        &self.system_name
    }
}

impl SystemNamed for ServerNetwork {
    fn system_name(&self) -> &str {
        &self.system_name
    }
}

impl SystemNamed for ServerPartition {
    fn system_name(&self) -> &str {
        &self.system_name
    }
}

impl SystemNamed for ServerRepository {
    fn system_name(&self) -> &str {
        &self.system_name
    }
}
