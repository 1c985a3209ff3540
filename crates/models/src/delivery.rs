use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{cargo, errors, tender, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deliveries")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Business identifier; not unique.
    pub delivery_id: String,
    pub tender_id: i32,
    #[serde(with = "crate::timestamp")]
    pub start_date: DateTime,
    #[serde(with = "crate::timestamp")]
    pub end_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Tender,
    Cargo,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Tender => Entity::belongs_to(tender::Entity)
                .from(Column::TenderId)
                .to(tender::Column::Id)
                .into(),
            Relation::Cargo => Entity::has_many(cargo::Entity).into(),
        }
    }
}

impl Related<tender::Entity> for Entity {
    fn to() -> RelationDef { Relation::Tender.def() }
}

impl Related<cargo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cargo.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInput {
    pub delivery_id: String,
    pub tender_id: i32,
    #[serde(with = "crate::timestamp")]
    pub start_date: DateTime,
    #[serde(with = "crate::timestamp")]
    pub end_date: DateTime,
}

impl DeliveryInput {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validation::required_text("deliveryId", &self.delivery_id)
    }
}

impl IntoActiveModel<ActiveModel> for DeliveryInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            delivery_id: Set(self.delivery_id),
            tender_id: Set(self.tender_id),
            start_date: Set(self.start_date),
            end_date: Set(self.end_date),
        }
    }
}

impl From<Model> for DeliveryInput {
    fn from(m: Model) -> Self {
        Self { delivery_id: m.delivery_id, tender_id: m.tender_id, start_date: m.start_date, end_date: m.end_date }
    }
}
