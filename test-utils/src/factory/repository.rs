//! Repository factory for creating `server_repository` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating backup repository rows attached to a server by system name.
pub struct RepositoryFactory<'a> {
    db: &'a DatabaseConnection,
    system_name: String,
    repository_type: i32,
    local_path: String,
}

impl<'a> RepositoryFactory<'a> {
    /// Creates a new RepositoryFactory for the given server.
    ///
    /// Defaults:
    /// - repository_type: `20` (Network)
    /// - local_path: `"D:\backup"`
    pub fn new(db: &'a DatabaseConnection, system_name: impl Into<String>) -> Self {
        Self {
            db,
            system_name: system_name.into(),
            repository_type: 20,
            local_path: r"D:\backup".to_string(),
        }
    }

    pub fn repository_type(mut self, repository_type: i32) -> Self {
        self.repository_type = repository_type;
        self
    }

    pub fn local_path(mut self, local_path: impl Into<String>) -> Self {
        self.local_path = local_path.into();
        self
    }

    /// Builds and inserts the repository entity into the database.
    pub async fn build(self) -> Result<entity::server_repository::Model, DbErr> {
        entity::server_repository::ActiveModel {
            user_id: ActiveValue::Set(1),
            group_id: ActiveValue::Set(1),
            center_id: ActiveValue::Set(1),
            system_name: ActiveValue::Set(self.system_name),
            os: ActiveValue::Set(1),
            repository_type: ActiveValue::Set(self.repository_type),
            used_size: ActiveValue::Set(2_147_483_648),
            free_size: ActiveValue::Set(8_589_934_592),
            local_path: ActiveValue::Set(self.local_path),
            remote_path: ActiveValue::Set(r"\\nas01\backup".to_string()),
            remote_user: ActiveValue::Set("backup".to_string()),
            remote_password: ActiveValue::Set("secret".to_string()),
            remote_domain: ActiveValue::Set("CORP".to_string()),
            ip_address: ActiveValue::Set("10.0.1.5".to_string()),
            converter_ip_address: ActiveValue::Set(String::new()),
            converter_port: ActiveValue::Set(0),
            cloud_connect_info: ActiveValue::Set(String::new()),
            last_update_time: ActiveValue::Set("2025-03-10 09:00:00".to_string()),
            flags: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a repository with default values for the given server.
pub async fn create_repository(
    db: &DatabaseConnection,
    system_name: &str,
) -> Result<entity::server_repository::Model, DbErr> {
    RepositoryFactory::new(db, system_name).build().await
}
