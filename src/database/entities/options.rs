use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub option_id: i32,
    pub product_id: i32,
    pub option_name: Option<String>,
    pub option_type: Option<String>,
    pub option_value: Option<String>,
    pub option_image: Option<String>,
    pub option_price_prefix: Option<String>,
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
    table: "options",
    primary_key: "option_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "option_id",
        "product_id",
        "option_name",
        "option_type",
        "option_value",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::exact("option_name"),
        FilterField::exact("option_type"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.option_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOption {
    pub product_id: i32,
    pub option_name: Option<String>,
    pub option_type: Option<String>,
    pub option_value: Option<String>,
    pub option_image: Option<String>,
    pub option_price_prefix: Option<String>,
}

impl From<NewOption> for ActiveModel {
    fn from(input: NewOption) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            option_name: Set(input.option_name),
            option_type: Set(input.option_type),
            option_value: Set(input.option_value),
            option_image: Set(input.option_image),
            option_price_prefix: Set(input.option_price_prefix),
            ..Default::default()
        }
    }
}
