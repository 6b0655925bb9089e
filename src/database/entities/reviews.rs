use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub review_id: i32,
    pub product_id: i32,
    pub reviews_count: Option<i32>,
    pub rating: Option<f64>,
    pub review_link: Option<String>,
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
    table: "reviews",
    primary_key: "review_id",
    parent_key: Some("product_id"),
    sort_fields: &[
        "review_id",
        "product_id",
        "reviews_count",
        "rating",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::decimal("rating"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.review_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub product_id: i32,
    pub reviews_count: Option<i32>,
    pub rating: Option<f64>,
    pub review_link: Option<String>,
}

impl From<NewReview> for ActiveModel {
    fn from(input: NewReview) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            reviews_count: Set(input.reviews_count),
            rating: Set(input.rating),
            review_link: Set(input.review_link),
            ..Default::default()
        }
    }
}
