use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessAccount::Id))
                    .col(string(BusinessAccount::CompanyName))
                    .col(string_uniq(BusinessAccount::BusinessNumber))
                    .col(string_uniq(BusinessAccount::Email))
                    .col(string(BusinessAccount::Password))
                    .col(string(BusinessAccount::IndustryType))
                    .col(integer(BusinessAccount::EmployeeCount))
                    .col(integer(BusinessAccount::FoundingYear))
                    .col(string(BusinessAccount::Status))
                    .col(boolean(BusinessAccount::MarketingConsent))
                    .col(boolean(BusinessAccount::DataProcessingConsent))
                    .col(timestamp_with_time_zone(BusinessAccount::CreatedAt))
                    .col(timestamp_with_time_zone(BusinessAccount::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum BusinessAccount {
    Table,
    Id,
    CompanyName,
    BusinessNumber,
    Email,
    Password,
    IndustryType,
    EmployeeCount,
    FoundingYear,
    Status,
    MarketingConsent,
    DataProcessingConsent,
    CreatedAt,
    UpdatedAt,
}
