//! Server factory for creating base inventory rows.
//!
//! Every field not exposed through a builder method is filled with a plausible
//! constant so tests only spell out what they assert on.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating `server_basic` rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db)
///     .system_name("db-01")
///     .os(2)
///     .status("connect")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    system_name: String,
    system_mode: i32,
    os: i32,
    os_version: String,
    ip_address: String,
    status: String,
    license_id: i32,
    total_physical_memory: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - system_name: `"server-{id}"` where id is auto-incremented
    /// - system_mode: `1` (Source)
    /// - os: `1` (Windows)
    /// - os_version: `"Windows Server 2019"`
    /// - ip_address: `"10.0.0.{id}"`
    /// - status: `"connect"`
    /// - license_id: `0` (unassigned)
    /// - total_physical_memory: `"17179869184"` (16 GB)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ServerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            system_name: format!("server-{}", id),
            system_mode: 1,
            os: 1,
            os_version: "Windows Server 2019".to_string(),
            ip_address: format!("10.0.0.{}", id % 255),
            status: "connect".to_string(),
            license_id: 0,
            total_physical_memory: "17179869184".to_string(),
        }
    }

    /// Sets the system name used as the join key for relation rows.
    pub fn system_name(mut self, system_name: impl Into<String>) -> Self {
        self.system_name = system_name.into();
        self
    }

    /// Sets the raw system mode code (1 Source, 2 Target, 3 Recovery, 10 VSM).
    pub fn system_mode(mut self, system_mode: i32) -> Self {
        self.system_mode = system_mode;
        self
    }

    /// Sets the raw OS code (1 Windows, 2 Linux, 3 Cloud).
    pub fn os(mut self, os: i32) -> Self {
        self.os = os;
        self
    }

    /// Sets the OS version string.
    pub fn os_version(mut self, os_version: impl Into<String>) -> Self {
        self.os_version = os_version.into();
        self
    }

    /// Sets the public IP address.
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }

    /// Sets the connection status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the license id (0 means unassigned).
    pub fn license_id(mut self, license_id: i32) -> Self {
        self.license_id = license_id;
        self
    }

    /// Sets the total physical memory in bytes, as stored by the agent.
    pub fn total_physical_memory(mut self, total_physical_memory: impl Into<String>) -> Self {
        self.total_physical_memory = total_physical_memory.into();
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server_basic::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_basic::Model, DbErr> {
        entity::server_basic::ActiveModel {
            user_id: ActiveValue::Set(1),
            group_id: ActiveValue::Set(1),
            center_id: ActiveValue::Set(1),
            system_name_display: ActiveValue::Set(self.system_name.to_uppercase()),
            system_name: ActiveValue::Set(self.system_name),
            system_mode: ActiveValue::Set(self.system_mode),
            csm_type: ActiveValue::Set(0),
            agent_version: ActiveValue::Set("7.1.0".to_string()),
            os: ActiveValue::Set(self.os),
            os_version: ActiveValue::Set(self.os_version),
            ip_address: ActiveValue::Set(self.ip_address),
            private_ip_address: ActiveValue::Set("192.168.0.10".to_string()),
            model: ActiveValue::Set("PowerEdge R740".to_string()),
            organization: ActiveValue::Set("Ops".to_string()),
            manufacturer: ActiveValue::Set("Dell Inc.".to_string()),
            system_type: ActiveValue::Set("x64-based PC".to_string()),
            cpu_name: ActiveValue::Set("Intel(R) Xeon(R) Silver 4214".to_string()),
            number_of_processors: ActiveValue::Set("24".to_string()),
            total_physical_memory: ActiveValue::Set(self.total_physical_memory),
            network_id: ActiveValue::Set(0),
            kernel_version: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            last_update_time: ActiveValue::Set("2025-03-10 09:00:00".to_string()),
            flags: ActiveValue::Set(0),
            origin_system_name: ActiveValue::Set(String::new()),
            license_id: ActiveValue::Set(self.license_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server_basic::Model, DbErr> {
    ServerFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_server_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(ServerBasic).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let server = create_server(db).await?;

        assert!(server.system_name.starts_with("server-"));
        assert_eq!(server.os, 1);
        assert_eq!(server.license_id, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_unique_system_names() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(ServerBasic).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_server(db).await?;
        let second = create_server(db).await?;

        assert_ne!(first.system_name, second.system_name);

        Ok(())
    }
}
