use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub producer_id: i32,
    pub p_id: Option<String>,
    pub producer: Option<String>,
    pub city: Option<String>,
    pub store_name: Option<String>,
    pub description: Option<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub producer_type: Option<String>,
    pub ccc: Option<String>,
    pub active: Option<bool>,
    pub comment: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contacts::Entity")]
    Contacts,
    #[sea_orm(has_many = "super::licenses::Entity")]
    Licenses,
    #[sea_orm(has_many = "super::locations::Entity")]
    Locations,
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
}

impl Related<super::contacts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl Related<super::licenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Licenses.def()
    }
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    table: "producers",
    primary_key: "producer_id",
    parent_key: None,
    sort_fields: &["producer_id", "p_id", "producer", "city", "store_name", "type"],
    filter_fields: &[
        FilterField::integer("producer_id"),
        FilterField::contains("p_id"),
        FilterField::contains("producer"),
        FilterField::exact("city"),
        FilterField::exact("store_name"),
        FilterField::exact("ccc"),
        FilterField::exact("type"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.producer_id
    }
}

/// Fields accepted when creating a producer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProducer {
    pub p_id: Option<String>,
    pub producer: Option<String>,
    pub city: Option<String>,
    pub store_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub producer_type: Option<String>,
    pub ccc: Option<String>,
    pub active: Option<bool>,
    pub comment: Option<String>,
}

impl From<NewProducer> for ActiveModel {
    fn from(input: NewProducer) -> Self {
        let now = Utc::now();
        ActiveModel {
            p_id: Set(input.p_id),
            producer: Set(input.producer),
            city: Set(input.city),
            store_name: Set(input.store_name),
            description: Set(input.description),
            producer_type: Set(input.producer_type),
            ccc: Set(input.ccc),
            active: Set(input.active),
            comment: Set(input.comment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}
