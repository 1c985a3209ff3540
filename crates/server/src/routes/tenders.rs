use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::{CreatedId, MessageResponse};
use models::tender::{self, TenderInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/tenders/create", tag = "tenders",
    request_body = crate::openapi::TenderInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 400, description = "Invalid Input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<TenderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedId>), JsonApiError> {
    let Json(input) = body?;
    let id = state.tenders.create(input).await?;
    info!(id, "tender_created");
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

#[utoipa::path(
    get, path = "/tenders/{id}", tag = "tenders",
    params(("id" = i32, Path, description = "Tender id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::TenderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn read(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<tender::Model>, JsonApiError> {
    let Path(id) = id?;
    let found = state.tenders.read(id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/tenders/update/{id}", tag = "tenders",
    params(("id" = i32, Path, description = "Tender id")),
    request_body = crate::openapi::TenderInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid Input"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<TenderInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    state.tenders.update(id, input).await?;
    info!(id, "tender_updated");
    Ok(Json(MessageResponse::with_id("tender updated", id)))
}

#[utoipa::path(
    delete, path = "/tenders/delete/{id}", tag = "tenders",
    params(("id" = i32, Path, description = "Tender id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = id?;
    state.tenders.delete(id).await?;
    info!(id, "tender_deleted");
    Ok(Json(MessageResponse::with_id("tender deleted", id)))
}

#[utoipa::path(
    post, path = "/tenders/confirm/{id}", tag = "tenders",
    params(("id" = i32, Path, description = "Tender id")),
    responses(
        (status = 200, description = "Confirmed", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn confirm(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = id?;
    state.tenders.confirm(id).await?;
    info!(id, "tender_confirmed");
    Ok(Json(MessageResponse::with_id("tender confirmed", id)))
}
