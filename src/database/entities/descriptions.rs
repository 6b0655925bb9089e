use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "descriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub description_id: i32,
    pub product_id: i32,
    pub description: Option<String>,
    pub additional_information: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
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
    table: "descriptions",
    primary_key: "description_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "description_id",
        "product_id",
        "meta_title",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::contains("meta_title"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.description_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDescription {
    pub product_id: i32,
    pub description: Option<String>,
    pub additional_information: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl From<NewDescription> for ActiveModel {
    fn from(input: NewDescription) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            description: Set(input.description),
            additional_information: Set(input.additional_information),
            meta_title: Set(input.meta_title),
            meta_description: Set(input.meta_description),
            ..Default::default()
        }
    }
}
