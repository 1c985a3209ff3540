use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter};
use tracing::{info, instrument};

use models::tender::{self, TenderInput};
use crate::errors::ServiceError;

/// CRUD over the `tenders` table.
#[derive(Clone)]
pub struct TenderService {
    db: DatabaseConnection,
}

impl TenderService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Insert a tender; the database assigns `id` and the `pending` status.
    #[instrument(skip(self, input), fields(contract = %input.longterm_contract_id))]
    pub async fn create(&self, input: TenderInput) -> Result<i32, ServiceError> {
        input.validate()?;
        let res = tender::Entity::insert(input.into_active_model())
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::from_insert("tender", e))?;
        info!(id = res.last_insert_id, "tender created");
        Ok(res.last_insert_id)
    }

    #[instrument(skip(self))]
    pub async fn read(&self, id: i32) -> Result<tender::Model, ServiceError> {
        tender::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("tender", id))
    }

    /// Overwrite every client-writable column. `status` is left as is.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: TenderInput) -> Result<(), ServiceError> {
        input.validate()?;
        let res = tender::Entity::update_many()
            .set(input.into_active_model())
            .filter(tender::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("tender", id));
        }
        info!(id, "tender updated");
        Ok(())
    }

    /// Delete a tender; its deliveries and their cargo go with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = tender::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("tender", id));
        }
        info!(id, "tender deleted");
        Ok(())
    }

    /// Mark a tender as confirmed.
    #[instrument(skip(self))]
    pub async fn confirm(&self, id: i32) -> Result<(), ServiceError> {
        let res = tender::Entity::update_many()
            .col_expr(tender::Column::Status, Expr::value(tender::STATUS_CONFIRMED))
            .filter(tender::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("tender", id));
        }
        info!(id, "tender confirmed");
        Ok(())
    }
}
