use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField, SortOrder};

/// One observed price; a product's rows form its price history.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pricing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pricing_id: i32,
    pub product_id: i32,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub currency: Option<String>,
    pub ccc: Option<String>,
    pub recorded_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::ProductId"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    table: "pricing",
    primary_key: "pricing_id",
    parent_key: Some("product_id"),
    sort_fields: &["pricing_id", "product_id", "price", "currency", "recorded_at"],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::exact("currency"),
        FilterField::exact("ccc"),
    ],
    child_order: Some(("recorded_at", SortOrder::Desc)),
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.pricing_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPricing {
    pub product_id: i32,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub currency: Option<String>,
    pub ccc: Option<String>,
    /// Defaults to the time of insert
    pub recorded_at: Option<ChronoDateTimeUtc>,
}

impl From<NewPricing> for ActiveModel {
    fn from(input: NewPricing) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            price: Set(input.price),
            old_price: Set(input.old_price),
            currency: Set(input.currency),
            ccc: Set(input.ccc),
            recorded_at: Set(input.recorded_at.unwrap_or_else(Utc::now)),
            ..Default::default()
        }
    }
}
