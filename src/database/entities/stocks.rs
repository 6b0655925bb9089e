use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub stock_id: i32,
    pub product_id: i32,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub out_of_stock_status: Option<String>,
    pub equivalency: Option<String>,
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
    table: "stocks",
    primary_key: "stock_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "stock_id",
        "product_id",
        "quantity",
        "weight",
        "out_of_stock_status",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::exact("out_of_stock_status"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.stock_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStock {
    pub product_id: i32,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub out_of_stock_status: Option<String>,
    pub equivalency: Option<String>,
}

impl From<NewStock> for ActiveModel {
    fn from(input: NewStock) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            quantity: Set(input.quantity),
            weight: Set(input.weight),
            weight_unit: Set(input.weight_unit),
            out_of_stock_status: Set(input.out_of_stock_status),
            equivalency: Set(input.equivalency),
            ..Default::default()
        }
    }
}
