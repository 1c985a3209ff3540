use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use models::cargo::{self, CargoInput};
use crate::errors::ServiceError;

/// Create and list rows of the `cargo` table.
#[derive(Clone)]
pub struct CargoService {
    db: DatabaseConnection,
}

impl CargoService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    #[instrument(skip(self, input), fields(delivery_id = input.delivery_id))]
    pub async fn create(&self, input: CargoInput) -> Result<i32, ServiceError> {
        input.validate()?;
        let res = cargo::Entity::insert(input.into_active_model())
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::from_insert("cargo", e))?;
        info!(id = res.last_insert_id, "cargo created");
        Ok(res.last_insert_id)
    }

    #[instrument(skip(self))]
    pub async fn list_by_delivery(&self, delivery_id: i32) -> Result<Vec<cargo::Model>, ServiceError> {
        let rows = cargo::Entity::find()
            .filter(cargo::Column::DeliveryId.eq(delivery_id))
            .order_by_asc(cargo::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cargo_input, delivery_input, get_db, tender_input};
    use crate::{DeliveryService, TenderService};

    #[tokio::test]
    async fn end_to_end_with_cascade() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let tenders = TenderService::new(db.clone());
        let deliveries = DeliveryService::new(db.clone());
        let svc = CargoService::new(db);

        let t1 = tenders.create(tender_input("LC-1", "1000.0")).await?;
        assert_eq!(t1, 1);
        let d1 = deliveries.create(delivery_input("D-1", t1)).await?;
        assert_eq!(d1, 1);
        let c1 = cargo_input("C-1", d1, "250.5");
        let c1_id = svc.create(c1.clone()).await?;
        assert_eq!(c1_id, 1);

        let listed = svc.list_by_delivery(d1).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, c1_id);
        assert_eq!(CargoInput::from(listed[0].clone()), c1);

        tenders.delete(t1).await?;
        assert!(matches!(tenders.read(t1).await, Err(ServiceError::NotFound(_))));
        assert!(deliveries.list_by_tender(t1).await?.is_empty());
        assert!(svc.list_by_delivery(d1).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_delivery_is_a_bad_reference() -> Result<(), anyhow::Error> {
        let svc = CargoService::new(get_db().await?);
        let err = svc.create(cargo_input("C-x", 3, "1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)), "got {err:?}");
        assert!(svc.list_by_delivery(3).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn negative_weight_is_rejected() -> Result<(), anyhow::Error> {
        let svc = CargoService::new(get_db().await?);
        let err = svc.create(cargo_input("C-1", 1, "-2")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        Ok(())
    }
}
