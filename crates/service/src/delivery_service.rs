use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use models::delivery::{self, DeliveryInput};
use crate::errors::ServiceError;

/// Create and list rows of the `deliveries` table.
#[derive(Clone)]
pub struct DeliveryService {
    db: DatabaseConnection,
}

impl DeliveryService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Insert a delivery. A `tender_id` with no tender behind it is a
    /// [`ServiceError::ConstraintViolation`].
    #[instrument(skip(self, input), fields(tender_id = input.tender_id))]
    pub async fn create(&self, input: DeliveryInput) -> Result<i32, ServiceError> {
        input.validate()?;
        let res = delivery::Entity::insert(input.into_active_model())
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::from_insert("delivery", e))?;
        info!(id = res.last_insert_id, "delivery created");
        Ok(res.last_insert_id)
    }

    /// All deliveries of a tender, oldest first. Unknown tenders yield an empty list.
    #[instrument(skip(self))]
    pub async fn list_by_tender(&self, tender_id: i32) -> Result<Vec<delivery::Model>, ServiceError> {
        let rows = delivery::Entity::find()
            .filter(delivery::Column::TenderId.eq(tender_id))
            .order_by_asc(delivery::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
