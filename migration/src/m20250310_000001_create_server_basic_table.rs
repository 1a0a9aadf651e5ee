use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerBasic::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerBasic::Id))
                    .col(integer(ServerBasic::UserId))
                    .col(integer(ServerBasic::GroupId))
                    .col(integer(ServerBasic::CenterId))
                    .col(string_uniq(ServerBasic::SystemName))
                    .col(string(ServerBasic::SystemNameDisplay))
                    .col(integer(ServerBasic::SystemMode))
                    .col(integer(ServerBasic::CsmType))
                    .col(string(ServerBasic::AgentVersion))
                    .col(integer(ServerBasic::Os))
                    .col(string(ServerBasic::OsVersion))
                    .col(string(ServerBasic::IpAddress))
                    .col(string(ServerBasic::PrivateIpAddress))
                    .col(string(ServerBasic::Model))
                    .col(string(ServerBasic::Organization))
                    .col(string(ServerBasic::Manufacturer))
                    .col(string(ServerBasic::SystemType))
                    .col(string(ServerBasic::CpuName))
                    .col(string(ServerBasic::NumberOfProcessors))
                    .col(string(ServerBasic::TotalPhysicalMemory))
                    .col(integer(ServerBasic::NetworkId))
                    .col(string(ServerBasic::KernelVersion))
                    .col(string(ServerBasic::Status))
                    .col(string(ServerBasic::LastUpdateTime))
                    .col(integer(ServerBasic::Flags))
                    .col(string(ServerBasic::OriginSystemName))
                    .col(integer(ServerBasic::LicenseId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerBasic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ServerBasic {
    Table,
    Id,
    UserId,
    GroupId,
    CenterId,
    SystemName,
    SystemNameDisplay,
    SystemMode,
    CsmType,
    AgentVersion,
    Os,
    OsVersion,
    IpAddress,
    PrivateIpAddress,
    Model,
    Organization,
    Manufacturer,
    SystemType,
    CpuName,
    NumberOfProcessors,
    TotalPhysicalMemory,
    NetworkId,
    KernelVersion,
    Status,
    LastUpdateTime,
    Flags,
    OriginSystemName,
    LicenseId,
}
