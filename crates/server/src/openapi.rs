use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct CreatedIdDoc { pub id: i32 }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String, pub id: Option<i32> }

/// Timestamps are `YYYY-MM-DD HH:MM:SS`; decimals carry two fraction digits.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenderInputDoc {
    pub longterm_contract_id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "2024-01-01 00:00:00")]
    pub start_date: String,
    #[schema(example = "2024-12-31 23:59:59")]
    pub end_date: String,
    pub employer_account_id: i32,
    pub contractor_account_id: i32,
    #[schema(example = 1500.25)]
    pub price: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenderDoc {
    pub id: i32,
    pub longterm_contract_id: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub employer_account_id: i32,
    pub contractor_account_id: i32,
    pub price: f64,
    #[schema(example = "pending")]
    pub status: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInputDoc {
    pub delivery_id: String,
    pub tender_id: i32,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDoc {
    pub id: i32,
    pub delivery_id: String,
    pub tender_id: i32,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CargoInputDoc {
    pub cargo_id: String,
    pub delivery_id: i32,
    pub cargo_type: String,
    #[schema(example = 250.5)]
    pub nett_weight: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CargoDoc {
    pub id: i32,
    pub cargo_id: String,
    pub delivery_id: i32,
    pub cargo_type: String,
    pub nett_weight: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::tenders::create,
        crate::routes::tenders::read,
        crate::routes::tenders::update,
        crate::routes::tenders::delete,
        crate::routes::tenders::confirm,
        crate::routes::deliveries::create,
        crate::routes::deliveries::list_by_tender,
        crate::routes::cargo::create,
        crate::routes::cargo::list_by_delivery,
    ),
    components(
        schemas(
            HealthResponse,
            CreatedIdDoc,
            MessageDoc,
            TenderInputDoc,
            TenderDoc,
            DeliveryInputDoc,
            DeliveryDoc,
            CargoInputDoc,
            CargoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "tenders"),
        (name = "deliveries"),
        (name = "cargo")
    )
)]
pub struct ApiDoc;
