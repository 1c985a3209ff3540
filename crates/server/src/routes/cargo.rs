use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::CreatedId;
use models::cargo::{self, CargoInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/cargo/create", tag = "cargo",
    request_body = crate::openapi::CargoInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 400, description = "Invalid Input"),
        (status = 422, description = "Unknown delivery")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CargoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedId>), JsonApiError> {
    let Json(input) = body?;
    let delivery_id = input.delivery_id;
    let id = state.cargo.create(input).await?;
    info!(id, delivery_id, "cargo_created");
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

#[utoipa::path(
    get, path = "/cargo/by-delivery/{delivery_id}", tag = "cargo",
    params(("delivery_id" = i32, Path, description = "Parent delivery id")),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CargoDoc])
    )
)]
pub async fn list_by_delivery(
    State(state): State<ServerState>,
    delivery_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<cargo::Model>>, JsonApiError> {
    let Path(delivery_id) = delivery_id?;
    let list = state.cargo.list_by_delivery(delivery_id).await?;
    info!(delivery_id, count = list.len(), "list cargo");
    Ok(Json(list))
}
