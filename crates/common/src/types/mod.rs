use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by endpoints that have no record to hand back.
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn with_id(message: &'static str, id: i32) -> Self {
        Self { message, id: Some(id) }
    }
}

/// Body returned by `create` endpoints.
#[derive(Serialize, Debug)]
pub struct CreatedId {
    pub id: i32,
}
