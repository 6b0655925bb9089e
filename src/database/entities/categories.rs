use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub product_id: i32,
    pub tree_number: Option<String>,
    pub parent: Option<String>,
    #[sea_orm(column_name = "level_1")]
    pub level_1: Option<String>,
    #[sea_orm(column_name = "level_2")]
    pub level_2: Option<String>,
    #[sea_orm(column_name = "level_3")]
    pub level_3: Option<String>,
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
    table: "categories",
    primary_key: "category_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "category_id",
        "product_id",
        "tree_number",
        "parent",
        "level_1",
        "level_2",
        "level_3",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::exact("tree_number"),
        FilterField::exact("parent"),
        FilterField::exact("level_1"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.category_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub product_id: i32,
    pub tree_number: Option<String>,
    pub parent: Option<String>,
    pub level_1: Option<String>,
    pub level_2: Option<String>,
    pub level_3: Option<String>,
}

impl From<NewCategory> for ActiveModel {
    fn from(input: NewCategory) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            tree_number: Set(input.tree_number),
            parent: Set(input.parent),
            level_1: Set(input.level_1),
            level_2: Set(input.level_2),
            level_3: Set(input.level_3),
            ..Default::default()
        }
    }
}
