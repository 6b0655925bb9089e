use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub location_id: i32,
    pub producer_id: i32,
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub ccc: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::producers::Entity",
        from = "Column::ProducerId",
        to = "super::producers::Column::ProducerId"
    )]
    Producers,
}

impl Related<super::producers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Producers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    table: "location",
    primary_key: "location_id",
    parent_key: Some("producer_id"),
    sort_fields: &["location_id", "store_name", "city", "province", "country"],
    filter_fields: &[
        FilterField::integer("producer_id"),
        FilterField::exact("city"),
        FilterField::exact("province"),
        FilterField::exact("country"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.location_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub producer_id: i32,
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub ccc: Option<String>,
}

impl From<NewLocation> for ActiveModel {
    fn from(input: NewLocation) -> Self {
        ActiveModel {
            producer_id: Set(input.producer_id),
            store_name: Set(input.store_name),
            address: Set(input.address),
            full_address: Set(input.full_address),
            city: Set(input.city),
            province: Set(input.province),
            postal_code: Set(input.postal_code),
            country: Set(input.country),
            longitude: Set(input.longitude),
            latitude: Set(input.latitude),
            ccc: Set(input.ccc),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
    }
}
