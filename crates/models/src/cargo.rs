use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{delivery, errors, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cargo")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cargo_id: String,
    pub delivery_id: i32,
    pub cargo_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "rust_decimal::serde::float")]
    pub nett_weight: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Delivery }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Delivery => Entity::belongs_to(delivery::Entity)
                .from(Column::DeliveryId)
                .to(delivery::Column::Id)
                .into(),
        }
    }
}

impl Related<delivery::Entity> for Entity {
    fn to() -> RelationDef { Relation::Delivery.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoInput {
    pub cargo_id: String,
    pub delivery_id: i32,
    pub cargo_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub nett_weight: Decimal,
}

impl CargoInput {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validation::required_text("cargoId", &self.cargo_id)?;
        validation::required_text("cargoType", &self.cargo_type)?;
        validation::amount("nettWeight", self.nett_weight)?;
        Ok(())
    }
}

impl IntoActiveModel<ActiveModel> for CargoInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            cargo_id: Set(self.cargo_id),
            delivery_id: Set(self.delivery_id),
            cargo_type: Set(self.cargo_type),
            nett_weight: Set(self.nett_weight),
        }
    }
}

impl From<Model> for CargoInput {
    fn from(m: Model) -> Self {
        Self { cargo_id: m.cargo_id, delivery_id: m.delivery_id, cargo_type: m.cargo_type, nett_weight: m.nett_weight }
    }
}
