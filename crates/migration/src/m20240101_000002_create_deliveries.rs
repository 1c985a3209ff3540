//! Create `deliveries` table with FK to `tenders`.
//!
//! Deleting a tender removes its deliveries.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deliveries::Table)
                    .if_not_exists()
                    .col(pk_auto(Deliveries::Id))
                    .col(string_len(Deliveries::DeliveryId, 255).not_null())
                    .col(integer(Deliveries::TenderId).not_null())
                    .col(timestamp(Deliveries::StartDate).not_null())
                    .col(timestamp(Deliveries::EndDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deliveries_tender")
                            .from(Deliveries::Table, Deliveries::TenderId)
                            .to(Tenders::Table, Tenders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Deliveries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Deliveries { Table, Id, DeliveryId, TenderId, StartDate, EndDate }

#[derive(DeriveIden)]
enum Tenders { Table, Id }
