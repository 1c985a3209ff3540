use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{error, warn};

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid Input", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.title, "message": self.detail });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(_) => Self::invalid_input(e.to_string()),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::ConstraintViolation(_) => {
                warn!(err = %e, "rejected reference to missing parent row");
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Bad Reference", Some(e.to_string()))
            }
            ServiceError::IdGeneration(_) | ServiceError::Db(_) => {
                error!(err = %e, "database operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_input(format!("invalid id: {}", rejection.body_text()))
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::NotFound("tender 9 not found".into()), StatusCode::NOT_FOUND),
            (ServiceError::ConstraintViolation("fk".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Model(ModelError::Validation("title required".into())), StatusCode::BAD_REQUEST),
            (ServiceError::IdGeneration("tender".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Db("closed".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn detail_carries_service_message() {
        let err = JsonApiError::from(ServiceError::NotFound("tender 9 not found".into()));
        assert_eq!(err.title, "Not Found");
        assert_eq!(err.detail.as_deref(), Some("not found: tender 9 not found"));
    }
}
