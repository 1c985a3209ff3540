use sea_orm::DatabaseConnection;
use std::str::FromStr;

use models::{cargo::CargoInput, delivery::DeliveryInput, tender::TenderInput, timestamp};
use rust_decimal::Decimal;

/// Fresh embedded database with the schema applied; isolated per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    models::db::init_schema(&db).await?;
    Ok(db)
}

pub fn tender_input(contract: &str, price: &str) -> TenderInput {
    TenderInput {
        longterm_contract_id: contract.to_string(),
        title: format!("Tender {contract}"),
        description: "Supply of construction materials".to_string(),
        start_date: timestamp::parse("2024-01-01 00:00:00").unwrap(),
        end_date: timestamp::parse("2024-06-30 18:00:00").unwrap(),
        employer_account_id: 1,
        contractor_account_id: 2,
        price: Decimal::from_str(price).unwrap(),
    }
}

pub fn delivery_input(delivery_id: &str, tender_id: i32) -> DeliveryInput {
    DeliveryInput {
        delivery_id: delivery_id.to_string(),
        tender_id,
        start_date: timestamp::parse("2024-02-01 08:00:00").unwrap(),
        end_date: timestamp::parse("2024-02-03 17:30:00").unwrap(),
    }
}

pub fn cargo_input(cargo_id: &str, delivery_id: i32, weight: &str) -> CargoInput {
    CargoInput {
        cargo_id: cargo_id.to_string(),
        delivery_id,
        cargo_type: "gravel".to_string(),
        nett_weight: Decimal::from_str(weight).unwrap(),
    }
}
