//! Partition factory for creating `server_partition` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating partition rows attached to a server by system name.
pub struct PartitionFactory<'a> {
    db: &'a DatabaseConnection,
    system_name: String,
    letter: String,
    size: i64,
    used: i64,
    free: i64,
}

impl<'a> PartitionFactory<'a> {
    /// Creates a new PartitionFactory for the given server.
    ///
    /// Defaults:
    /// - letter: `"C:"`
    /// - size: 1 GB, used: 512 MB, free: 512 MB
    pub fn new(db: &'a DatabaseConnection, system_name: impl Into<String>) -> Self {
        Self {
            db,
            system_name: system_name.into(),
            letter: "C:".to_string(),
            size: 1_073_741_824,
            used: 536_870_912,
            free: 536_870_912,
        }
    }

    pub fn letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = letter.into();
        self
    }

    /// Sets size, used and free bytes together.
    pub fn usage(mut self, size: i64, used: i64, free: i64) -> Self {
        self.size = size;
        self.used = used;
        self.free = free;
        self
    }

    /// Builds and inserts the partition entity into the database.
    pub async fn build(self) -> Result<entity::server_partition::Model, DbErr> {
        entity::server_partition::ActiveModel {
            user_id: ActiveValue::Set(1),
            group_id: ActiveValue::Set(1),
            center_id: ActiveValue::Set(1),
            system_name: ActiveValue::Set(self.system_name),
            disk_num: ActiveValue::Set(0),
            partition_num: ActiveValue::Set(1),
            size: ActiveValue::Set(self.size),
            used: ActiveValue::Set(self.used),
            free: ActiveValue::Set(self.free),
            letter: ActiveValue::Set(self.letter),
            caption: ActiveValue::Set("Local Disk".to_string()),
            device: ActiveValue::Set(String::new()),
            file_system: ActiveValue::Set("NTFS".to_string()),
            flag: ActiveValue::Set(String::new()),
            last_update_time: ActiveValue::Set("2025-03-10 09:00:00".to_string()),
            flags: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a partition with default values for the given server.
pub async fn create_partition(
    db: &DatabaseConnection,
    system_name: &str,
) -> Result<entity::server_partition::Model, DbErr> {
    PartitionFactory::new(db, system_name).build().await
}
