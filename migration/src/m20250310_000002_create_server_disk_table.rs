use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerDisk::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerDisk::Id))
                    .col(integer(ServerDisk::UserId))
                    .col(integer(ServerDisk::GroupId))
                    .col(integer(ServerDisk::CenterId))
                    .col(string(ServerDisk::SystemName))
                    .col(integer(ServerDisk::DiskType))
                    .col(integer(ServerDisk::DiskNum))
                    .col(string(ServerDisk::DiskSize))
                    .col(string(ServerDisk::DiskCaption))
                    .col(string(ServerDisk::Device))
                    .col(string(ServerDisk::Product))
                    .col(string(ServerDisk::Vendor))
                    .col(string(ServerDisk::LastUpdateTime))
                    .col(integer(ServerDisk::Flags))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_disk_system_name")
                    .table(ServerDisk::Table)
                    .col(ServerDisk::SystemName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerDisk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ServerDisk {
    Table,
    Id,
    UserId,
    GroupId,
    CenterId,
    SystemName,
    DiskType,
    DiskNum,
    DiskSize,
    DiskCaption,
    Device,
    Product,
    Vendor,
    LastUpdateTime,
    Flags,
}
