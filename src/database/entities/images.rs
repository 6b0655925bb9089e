use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField, SortOrder};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub image_id: i32,
    pub product_id: i32,
    pub image_url: Option<String>,
    pub image_type: Option<String>,
    pub sort_order: Option<i32>,
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
    table: "images",
    primary_key: "image_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "image_id",
        "product_id",
        "image_type",
        "sort_order",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::contains("image_url"),
        FilterField::exact("image_type"),
    ],
    child_order: Some(("sort_order", SortOrder::Asc)),
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.image_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewImage {
    pub product_id: i32,
    pub image_url: Option<String>,
    pub image_type: Option<String>,
    pub sort_order: Option<i32>,
}

impl From<NewImage> for ActiveModel {
    fn from(input: NewImage) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            image_url: Set(input.image_url),
            image_type: Set(input.image_type),
            sort_order: Set(input.sort_order),
            ..Default::default()
        }
    }
}
