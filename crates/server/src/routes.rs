use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{openapi::ApiDoc, state::ServerState};

pub mod cargo;
pub mod deliveries;
pub mod tenders;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn index() -> &'static str {
    "Hi"
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public endpoints plus tender, delivery and cargo routes
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let tender_routes = Router::new()
        .route("/tenders/create", post(tenders::create))
        .route("/tenders/:id", get(tenders::read))
        .route("/tenders/update/:id", put(tenders::update))
        .route("/tenders/delete/:id", delete(tenders::delete))
        .route("/tenders/confirm/:id", post(tenders::confirm));

    let delivery_routes = Router::new()
        .route("/deliveries/create", post(deliveries::create))
        .route("/deliveries/by-tender/:tender_id", get(deliveries::list_by_tender));

    let cargo_routes = Router::new()
        .route("/cargo/create", post(cargo::create))
        .route("/cargo/by-delivery/:delivery_id", get(cargo::list_by_delivery));

    public
        .merge(tender_routes)
        .merge(delivery_routes)
        .merge(cargo_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
