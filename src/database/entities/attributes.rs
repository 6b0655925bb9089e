use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attributes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub attribute_id: i32,
    pub product_id: i32,
    pub attribute_name: Option<String>,
    pub attribute_value: Option<String>,
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
    table: "attributes",
    primary_key: "attribute_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "attribute_id",
        "product_id",
        "attribute_name",
        "attribute_value",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::exact("attribute_name"),
        FilterField::contains("attribute_value"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.attribute_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAttribute {
    pub product_id: i32,
    pub attribute_name: Option<String>,
    pub attribute_value: Option<String>,
}

impl From<NewAttribute> for ActiveModel {
    fn from(input: NewAttribute) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            attribute_name: Set(input.attribute_name),
            attribute_value: Set(input.attribute_value),
            ..Default::default()
        }
    }
}
