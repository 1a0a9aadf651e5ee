pub use sea_orm_migration::prelude::*;

mod m20250310_000001_create_server_basic_table;
mod m20250310_000002_create_server_disk_table;
mod m20250310_000003_create_server_network_table;
mod m20250310_000004_create_server_partition_table;
mod m20250310_000005_create_server_repository_table;
mod m20250312_000006_create_user_info_table;
mod m20250314_000007_create_business_account_table;
mod m20250314_000008_create_business_address_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_create_server_basic_table::Migration),
            Box::new(m20250310_000002_create_server_disk_table::Migration),
            Box::new(m20250310_000003_create_server_network_table::Migration),
            Box::new(m20250310_000004_create_server_partition_table::Migration),
            Box::new(m20250310_000005_create_server_repository_table::Migration),
            Box::new(m20250312_000006_create_user_info_table::Migration),
            Box::new(m20250314_000007_create_business_account_table::Migration),
            Box::new(m20250314_000008_create_business_address_table::Migration),
        ]
    }
}
