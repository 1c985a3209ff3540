use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{delivery, errors, validation};

/// Status the database assigns to freshly created tenders.
pub const STATUS_PENDING: &str = "pending";
/// Status written by the confirm operation.
pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tenders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub longterm_contract_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[serde(with = "crate::timestamp")]
    pub start_date: DateTime,
    #[serde(with = "crate::timestamp")]
    pub end_date: DateTime,
    pub employer_account_id: i32,
    pub contractor_account_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Delivery,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Delivery => Entity::has_many(delivery::Entity).into() }
    }
}

impl Related<delivery::Entity> for Entity {
    fn to() -> RelationDef { Relation::Delivery.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Client-writable tender fields: everything except `id` and `status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderInput {
    pub longterm_contract_id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::timestamp")]
    pub start_date: DateTime,
    #[serde(with = "crate::timestamp")]
    pub end_date: DateTime,
    pub employer_account_id: i32,
    pub contractor_account_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl TenderInput {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validation::required_text("longtermContractId", &self.longterm_contract_id)?;
        validation::required_text("title", &self.title)?;
        validation::amount("price", self.price)?;
        Ok(())
    }
}

impl IntoActiveModel<ActiveModel> for TenderInput {
    /// `id` and `status` stay `NotSet` so the database fills them on insert
    /// and an update never touches them.
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            longterm_contract_id: Set(self.longterm_contract_id),
            title: Set(self.title),
            description: Set(self.description),
            start_date: Set(self.start_date),
            end_date: Set(self.end_date),
            employer_account_id: Set(self.employer_account_id),
            contractor_account_id: Set(self.contractor_account_id),
            price: Set(self.price),
            status: NotSet,
        }
    }
}

impl From<Model> for TenderInput {
    fn from(m: Model) -> Self {
        Self {
            longterm_contract_id: m.longterm_contract_id,
            title: m.title,
            description: m.description,
            start_date: m.start_date,
            end_date: m.end_date,
            employer_account_id: m.employer_account_id,
            contractor_account_id: m.contractor_account_id,
            price: m.price,
        }
    }
}
