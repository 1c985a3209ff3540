use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad reference: {0}")]
    ConstraintViolation(String),
    #[error("id generation failed: {0}")]
    IdGeneration(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    /// Classify a driver error for an insert into `entity`'s table.
    pub fn from_insert(entity: &str, err: DbErr) -> Self {
        match err {
            DbErr::RecordNotInserted => Self::IdGeneration(format!("no generated key returned for new {}", entity)),
            other => Self::from(other),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Db(err.to_string()),
        }
    }
}
