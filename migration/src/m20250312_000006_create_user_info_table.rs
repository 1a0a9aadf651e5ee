use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInfo::Table)
                    .if_not_exists()
                    .col(pk_auto(UserInfo::Id))
                    .col(string(UserInfo::Name))
                    .col(string_uniq(UserInfo::Email))
                    .col(string(UserInfo::Password))
                    .col(timestamp_with_time_zone(UserInfo::CreatedAt))
                    .col(timestamp_with_time_zone(UserInfo::UpdatedAt))
                    .col(timestamp_with_time_zone_null(UserInfo::LastLoginAt))
                    .col(integer(UserInfo::LoginFailures))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserInfo {
    Table,
    Id,
    Name,
    Email,
    Password,
    CreatedAt,
    UpdatedAt,
    LastLoginAt,
    LoginFailures,
}
