use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

pub const DEFAULT_WEIGHT_UNIT: &str = "kg";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i32,
    pub p_id: Option<String>,
    pub sku: Option<String>,
    pub brand_name: Option<String>,
    pub manufacturer: Option<String>,
    pub page_url: Option<String>,
    pub main_image: Option<String>,
    pub quantity: i32,
    pub weight: f64,
    pub weight_unit: String,
    pub equivalency: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attributes::Entity")]
    Attributes,
    #[sea_orm(has_many = "super::categories::Entity")]
    Categories,
    #[sea_orm(has_one = "super::descriptions::Entity")]
    Descriptions,
    #[sea_orm(has_many = "super::images::Entity")]
    Images,
    #[sea_orm(has_many = "super::options::Entity")]
    Options,
    #[sea_orm(has_many = "super::pricing::Entity")]
    Pricing,
    #[sea_orm(has_one = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_one = "super::stocks::Entity")]
    Stocks,
}

impl Related<super::attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attributes.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::descriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Descriptions.def()
    }
}

impl Related<super::images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Options.def()
    }
}

impl Related<super::pricing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pricing.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::stocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    table: "products",
    primary_key: "product_id",
    parent_key: None,
    sort_fields: &[
        "product_id",
        "p_id",
        "sku",
        "brand_name",
        "manufacturer",
        "quantity",
        "weight",
        "created_at",
    ],
    filter_fields: &[
        FilterField::integer("product_id"),
        FilterField::exact("p_id"),
        FilterField::exact("sku"),
        FilterField::exact("brand_name"),
        FilterField::exact("manufacturer"),
        FilterField::contains("main_image"),
        FilterField::integer("quantity"),
        FilterField::decimal("weight"),
        FilterField::exact("weight_unit"),
        FilterField::exact("equivalency"),
        FilterField::timestamp("created_at"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.product_id
    }
}

/// Fields accepted when creating a product.
///
/// Omitted `quantity` and `weight` become zero and an omitted `weight_unit`
/// becomes [`DEFAULT_WEIGHT_UNIT`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub p_id: Option<String>,
    pub sku: Option<String>,
    pub brand_name: Option<String>,
    pub manufacturer: Option<String>,
    pub page_url: Option<String>,
    pub main_image: Option<String>,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub equivalency: Option<String>,
}

impl From<NewProduct> for ActiveModel {
    fn from(input: NewProduct) -> Self {
        ActiveModel {
            p_id: Set(input.p_id),
            sku: Set(input.sku),
            brand_name: Set(input.brand_name),
            manufacturer: Set(input.manufacturer),
            page_url: Set(input.page_url),
            main_image: Set(input.main_image),
            quantity: Set(input.quantity.unwrap_or(0)),
            weight: Set(input.weight.unwrap_or(0.0)),
            weight_unit: Set(input
                .weight_unit
                .unwrap_or_else(|| DEFAULT_WEIGHT_UNIT.to_string())),
            equivalency: Set(input.equivalency),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
    }
}
