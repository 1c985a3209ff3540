//! Create `cargo` table with FK to `deliveries`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cargo::Table)
                    .if_not_exists()
                    .col(pk_auto(Cargo::Id))
                    .col(string_len(Cargo::CargoId, 255).not_null())
                    .col(integer(Cargo::DeliveryId).not_null())
                    .col(string_len(Cargo::CargoType, 255).not_null())
                    .col(decimal_len(Cargo::NettWeight, 10, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cargo_delivery")
                            .from(Cargo::Table, Cargo::DeliveryId)
                            .to(Deliveries::Table, Deliveries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cargo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cargo { Table, Id, CargoId, DeliveryId, CargoType, NettWeight }

#[derive(DeriveIden)]
enum Deliveries { Table, Id }
