use sea_orm_migration::{prelude::*, schema::*};

use super::m20250314_000007_create_business_account_table::BusinessAccount;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessAddress::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessAddress::Id))
                    .col(integer_uniq(BusinessAddress::BusinessId))
                    .col(string(BusinessAddress::Street))
                    .col(string(BusinessAddress::City))
                    .col(string(BusinessAddress::State))
                    .col(string(BusinessAddress::ZipCode))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_address_business_id")
                            .from(BusinessAddress::Table, BusinessAddress::BusinessId)
                            .to(BusinessAccount::Table, BusinessAccount::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessAddress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum BusinessAddress {
    Table,
    Id,
    BusinessId,
    Street,
    City,
    State,
    ZipCode,
}
