//! Migrator registering the schema in dependency order.
//! Every migration is a plain `CREATE TABLE IF NOT EXISTS`, so running
//! `Migrator::up` on each start is idempotent.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_tenders;
mod m20240101_000002_create_deliveries;
mod m20240101_000003_create_cargo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tenders::Migration),
            Box::new(m20240101_000002_create_deliveries::Migration),
            Box::new(m20240101_000003_create_cargo::Migration),
        ]
    }
}
