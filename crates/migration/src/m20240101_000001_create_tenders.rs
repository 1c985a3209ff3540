//! Create `tenders` table.
//!
//! Root entity; deliveries reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tenders::Table)
                    .if_not_exists()
                    .col(pk_auto(Tenders::Id))
                    .col(string_len(Tenders::LongtermContractId, 255).not_null())
                    .col(string_len(Tenders::Title, 255).not_null())
                    .col(text(Tenders::Description).not_null())
                    .col(timestamp(Tenders::StartDate).not_null())
                    .col(timestamp(Tenders::EndDate).not_null())
                    .col(integer(Tenders::EmployerAccountId).not_null())
                    .col(integer(Tenders::ContractorAccountId).not_null())
                    .col(decimal_len(Tenders::Price, 10, 2).not_null())
                    .col(string_len(Tenders::Status, 50).not_null().default("pending"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tenders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tenders {
    Table,
    Id,
    LongtermContractId,
    Title,
    Description,
    StartDate,
    EndDate,
    EmployerAccountId,
    ContractorAccountId,
    Price,
    Status,
}
