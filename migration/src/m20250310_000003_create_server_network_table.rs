use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerNetwork::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerNetwork::Id))
                    .col(integer(ServerNetwork::UserId))
                    .col(integer(ServerNetwork::GroupId))
                    .col(integer(ServerNetwork::CenterId))
                    .col(string(ServerNetwork::SystemName))
                    .col(string(ServerNetwork::NetworkName))
                    .col(string(ServerNetwork::IpAddress))
                    .col(string(ServerNetwork::Subnet))
                    .col(string(ServerNetwork::Gateway))
                    .col(string(ServerNetwork::MacAddress))
                    .col(string(ServerNetwork::LastUpdateTime))
                    .col(integer(ServerNetwork::Flags))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_network_system_name")
                    .table(ServerNetwork::Table)
                    .col(ServerNetwork::SystemName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerNetwork::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ServerNetwork {
    Table,
    Id,
    UserId,
    GroupId,
    CenterId,
    SystemName,
    NetworkName,
    IpAddress,
    Subnet,
    Gateway,
    MacAddress,
    LastUpdateTime,
    Flags,
}
