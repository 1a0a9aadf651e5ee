//! Disk factory for creating `server_disk` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating disk rows attached to a server by system name.
pub struct DiskFactory<'a> {
    db: &'a DatabaseConnection,
    system_name: String,
    disk_type: i32,
    disk_num: i32,
    disk_size: String,
    device: String,
}

impl<'a> DiskFactory<'a> {
    /// Creates a new DiskFactory for the given server.
    ///
    /// Defaults:
    /// - disk_type: `1` (Gpt)
    /// - disk_num: `0`
    /// - disk_size: `"1073741824"` (1 GB)
    /// - device: `"\\.\PHYSICALDRIVE0"`
    pub fn new(db: &'a DatabaseConnection, system_name: impl Into<String>) -> Self {
        Self {
            db,
            system_name: system_name.into(),
            disk_type: 1,
            disk_num: 0,
            disk_size: "1073741824".to_string(),
            device: r"\\.\PHYSICALDRIVE0".to_string(),
        }
    }

    pub fn disk_type(mut self, disk_type: i32) -> Self {
        self.disk_type = disk_type;
        self
    }

    pub fn disk_num(mut self, disk_num: i32) -> Self {
        self.disk_num = disk_num;
        self
    }

    pub fn disk_size(mut self, disk_size: impl Into<String>) -> Self {
        self.disk_size = disk_size.into();
        self
    }

    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    /// Builds and inserts the disk entity into the database.
    pub async fn build(self) -> Result<entity::server_disk::Model, DbErr> {
        entity::server_disk::ActiveModel {
            user_id: ActiveValue::Set(1),
            group_id: ActiveValue::Set(1),
            center_id: ActiveValue::Set(1),
            system_name: ActiveValue::Set(self.system_name),
            disk_type: ActiveValue::Set(self.disk_type),
            disk_num: ActiveValue::Set(self.disk_num),
            disk_size: ActiveValue::Set(self.disk_size),
            disk_caption: ActiveValue::Set("Virtual Disk".to_string()),
            device: ActiveValue::Set(self.device),
            product: ActiveValue::Set("Virtual Disk".to_string()),
            vendor: ActiveValue::Set("VMware".to_string()),
            last_update_time: ActiveValue::Set("2025-03-10 09:00:00".to_string()),
            flags: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a disk with default values for the given server.
pub async fn create_disk(
    db: &DatabaseConnection,
    system_name: &str,
) -> Result<entity::server_disk::Model, DbErr> {
    DiskFactory::new(db, system_name).build().await
}
