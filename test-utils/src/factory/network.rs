//! Network factory for creating `server_network` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating network interface rows attached to a server by system name.
pub struct NetworkFactory<'a> {
    db: &'a DatabaseConnection,
    system_name: String,
    network_name: String,
    ip_address: String,
    gateway: String,
}

impl<'a> NetworkFactory<'a> {
    /// Creates a new NetworkFactory for the given server.
    ///
    /// Defaults:
    /// - network_name: `"Ethernet0"`
    /// - ip_address: `"10.0.0.10"`
    /// - gateway: `"10.0.0.1"`
    pub fn new(db: &'a DatabaseConnection, system_name: impl Into<String>) -> Self {
        Self {
            db,
            system_name: system_name.into(),
            network_name: "Ethernet0".to_string(),
            ip_address: "10.0.0.10".to_string(),
            gateway: "10.0.0.1".to_string(),
        }
    }

    pub fn network_name(mut self, network_name: impl Into<String>) -> Self {
        self.network_name = network_name.into();
        self
    }

    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }

    pub fn gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = gateway.into();
        self
    }

    /// Builds and inserts the network entity into the database.
    pub async fn build(self) -> Result<entity::server_network::Model, DbErr> {
        entity::server_network::ActiveModel {
            user_id: ActiveValue::Set(1),
            group_id: ActiveValue::Set(1),
            center_id: ActiveValue::Set(1),
            system_name: ActiveValue::Set(self.system_name),
            network_name: ActiveValue::Set(self.network_name),
            ip_address: ActiveValue::Set(self.ip_address),
            subnet: ActiveValue::Set("255.255.255.0".to_string()),
            gateway: ActiveValue::Set(self.gateway),
            mac_address: ActiveValue::Set("00:50:56:AA:BB:CC".to_string()),
            last_update_time: ActiveValue::Set("2025-03-10 09:00:00".to_string()),
            flags: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a network interface with default values for the given server.
pub async fn create_network(
    db: &DatabaseConnection,
    system_name: &str,
) -> Result<entity::server_network::Model, DbErr> {
    NetworkFactory::new(db, system_name).build().await
}
