use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::CreatedId;
use models::delivery::{self, DeliveryInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/deliveries/create", tag = "deliveries",
    request_body = crate::openapi::DeliveryInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 400, description = "Invalid Input"),
        (status = 422, description = "Unknown tender")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<DeliveryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedId>), JsonApiError> {
    let Json(input) = body?;
    let tender_id = input.tender_id;
    let id = state.deliveries.create(input).await?;
    info!(id, tender_id, "delivery_created");
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

#[utoipa::path(
    get, path = "/deliveries/by-tender/{tender_id}", tag = "deliveries",
    params(("tender_id" = i32, Path, description = "Parent tender id")),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::DeliveryDoc])
    )
)]
pub async fn list_by_tender(
    State(state): State<ServerState>,
    tender_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<delivery::Model>>, JsonApiError> {
    let Path(tender_id) = tender_id?;
    let list = state.deliveries.list_by_tender(tender_id).await?;
    info!(tender_id, count = list.len(), "list deliveries");
    Ok(Json(list))
}
