use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerPartition::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerPartition::Id))
                    .col(integer(ServerPartition::UserId))
                    .col(integer(ServerPartition::GroupId))
                    .col(integer(ServerPartition::CenterId))
                    .col(string(ServerPartition::SystemName))
                    .col(integer(ServerPartition::DiskNum))
                    .col(integer(ServerPartition::PartitionNum))
                    .col(big_integer(ServerPartition::Size))
                    .col(big_integer(ServerPartition::Used))
                    .col(big_integer(ServerPartition::Free))
                    .col(string(ServerPartition::Letter))
                    .col(string(ServerPartition::Caption))
                    .col(string(ServerPartition::Device))
                    .col(string(ServerPartition::FileSystem))
                    .col(string(ServerPartition::Flag))
                    .col(string(ServerPartition::LastUpdateTime))
                    .col(integer(ServerPartition::Flags))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_partition_system_name")
                    .table(ServerPartition::Table)
                    .col(ServerPartition::SystemName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerPartition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ServerPartition {
    Table,
    Id,
    UserId,
    GroupId,
    CenterId,
    SystemName,
    DiskNum,
    PartitionNum,
    Size,
    Used,
    Free,
    Letter,
    Caption,
    Device,
    FileSystem,
    Flag,
    LastUpdateTime,
    Flags,
}
