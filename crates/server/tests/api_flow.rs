use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use serde_json::{json, Value};
use tower::Service;

async fn build_app() -> anyhow::Result<Router> {
    let cfg = AppConfig { database: DatabaseConfig::in_memory(), ..AppConfig::default() };
    server::startup::build_app(&cfg).await
}

fn tender_body(title: &str) -> Value {
    json!({
        "longtermContractId": "LC-1",
        "title": title,
        "description": "Resurface the ring road",
        "startDate": "2024-01-01 00:00:00",
        "endDate": "2024-12-31 23:59:59",
        "employerAccountId": 10,
        "contractorAccountId": 20,
        "price": 1500.25
    })
}

async fn send(app: &mut Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Ok((status, value))
}

#[tokio::test]
async fn test_index_health_and_openapi() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let resp = app.call(Request::builder().uri("/").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    assert_eq!(&bytes[..], b"Hi");

    let (status, body) = send(&mut app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = send(&mut app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/tenders/create").is_some());
    assert!(doc["paths"].get("/cargo/by-delivery/{delivery_id}").is_some());
    Ok(())
}

#[tokio::test]
async fn test_tender_delivery_cargo_lifecycle() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, created) = send(&mut app, "POST", "/tenders/create", Some(tender_body("Road works"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1}));

    let (status, tender) = send(&mut app, "GET", "/tenders/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tender["status"], "pending");
    assert_eq!(tender["price"], json!(1500.25));
    assert_eq!(tender["startDate"], "2024-01-01 00:00:00");

    let delivery = json!({
        "deliveryId": "D-100",
        "tenderId": 1,
        "startDate": "2024-02-01 08:00:00",
        "endDate": "2024-02-03 17:30:00"
    });
    let (status, created) = send(&mut app, "POST", "/deliveries/create", Some(delivery)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1}));

    let cargo = json!({"cargoId": "C-1", "deliveryId": 1, "cargoType": "gravel", "nettWeight": 250.5});
    let (status, created) = send(&mut app, "POST", "/cargo/create", Some(cargo)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1}));

    let (status, deliveries) = send(&mut app, "GET", "/deliveries/by-tender/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deliveries.as_array().map(Vec::len), Some(1));
    assert_eq!(deliveries[0]["deliveryId"], "D-100");

    let (status, cargo) = send(&mut app, "GET", "/cargo/by-delivery/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cargo[0]["nettWeight"], json!(250.5));
    assert_eq!(cargo[0]["cargoType"], "gravel");

    let (status, _) = send(&mut app, "DELETE", "/tenders/delete/1", None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&mut app, "GET", "/tenders/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, deliveries) = send(&mut app, "GET", "/deliveries/by-tender/1", None).await?;
    assert_eq!(deliveries, json!([]));
    let (_, cargo) = send(&mut app, "GET", "/cargo/by-delivery/1", None).await?;
    assert_eq!(cargo, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_update_and_confirm_tender() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (_, created) = send(&mut app, "POST", "/tenders/create", Some(tender_body("Road works"))).await?;
    let id = created["id"].as_i64().unwrap_or_default();

    let (status, msg) = send(&mut app, "PUT", &format!("/tenders/update/{id}"), Some(tender_body("Bridge works"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg["id"], json!(id));

    let (_, tender) = send(&mut app, "GET", &format!("/tenders/{id}"), None).await?;
    assert_eq!(tender["title"], "Bridge works");
    assert_eq!(tender["status"], "pending");

    let (status, _) = send(&mut app, "POST", &format!("/tenders/confirm/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, tender) = send(&mut app, "GET", &format!("/tenders/{id}"), None).await?;
    assert_eq!(tender["status"], "confirmed");

    // updating keeps the confirmed status
    let (status, _) = send(&mut app, "PUT", &format!("/tenders/update/{id}"), Some(tender_body("Tunnel works"))).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, tender) = send(&mut app, "GET", &format!("/tenders/{id}"), None).await?;
    assert_eq!(tender["status"], "confirmed");
    Ok(())
}

#[tokio::test]
async fn test_missing_tender_is_not_found() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, body) = send(&mut app, "GET", "/tenders/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (status, _) = send(&mut app, "PUT", "/tenders/update/42", Some(tender_body("Road works"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&mut app, "DELETE", "/tenders/delete/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&mut app, "POST", "/tenders/confirm/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_unknown_parent_is_rejected() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let delivery = json!({
        "deliveryId": "D-1",
        "tenderId": 999,
        "startDate": "2024-02-01 08:00:00",
        "endDate": "2024-02-03 17:30:00"
    });
    let (status, body) = send(&mut app, "POST", "/deliveries/create", Some(delivery)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Bad Reference");

    let cargo = json!({"cargoId": "C-1", "deliveryId": 999, "cargoType": "sand", "nettWeight": 10});
    let (status, _) = send(&mut app, "POST", "/cargo/create", Some(cargo)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, deliveries) = send(&mut app, "GET", "/deliveries/by-tender/999", None).await?;
    assert_eq!(deliveries, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_malformed_requests_are_bad_request() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, body) = send(&mut app, "GET", "/tenders/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Input");

    let (status, _) = send(&mut app, "GET", "/deliveries/by-tender/x1", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&mut app, "POST", "/tenders/create", Some(json!({"title": "only a title"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&mut app, "POST", "/tenders/create", Some(tender_body("   "))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Input");

    let mut negative = tender_body("Road works");
    negative["price"] = json!(-1);
    let (status, _) = send(&mut app, "POST", "/tenders/create", Some(negative)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // nothing was stored by the rejected requests
    let (status, _) = send(&mut app, "GET", "/tenders/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
