use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerRepository::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerRepository::Id))
                    .col(integer(ServerRepository::UserId))
                    .col(integer(ServerRepository::GroupId))
                    .col(integer(ServerRepository::CenterId))
                    .col(string(ServerRepository::SystemName))
                    .col(integer(ServerRepository::Os))
                    .col(integer(ServerRepository::RepositoryType))
                    .col(big_integer(ServerRepository::UsedSize))
                    .col(big_integer(ServerRepository::FreeSize))
                    .col(string(ServerRepository::LocalPath))
                    .col(string(ServerRepository::RemotePath))
                    .col(string(ServerRepository::RemoteUser))
                    .col(string(ServerRepository::RemotePassword))
                    .col(string(ServerRepository::RemoteDomain))
                    .col(string(ServerRepository::IpAddress))
                    .col(string(ServerRepository::ConverterIpAddress))
                    .col(integer(ServerRepository::ConverterPort))
                    .col(string(ServerRepository::CloudConnectInfo))
                    .col(string(ServerRepository::LastUpdateTime))
                    .col(integer(ServerRepository::Flags))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_repository_system_name")
                    .table(ServerRepository::Table)
                    .col(ServerRepository::SystemName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerRepository::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ServerRepository {
    Table,
    Id,
    UserId,
    GroupId,
    CenterId,
    SystemName,
    Os,
    RepositoryType,
    UsedSize,
    FreeSize,
    LocalPath,
    RemotePath,
    RemoteUser,
    RemotePassword,
    RemoteDomain,
    IpAddress,
    ConverterIpAddress,
    ConverterPort,
    CloudConnectInfo,
    LastUpdateTime,
    Flags,
}
