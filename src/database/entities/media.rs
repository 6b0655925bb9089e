use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub media_id: i32,
    pub producer_id: i32,
    pub page_url: Option<String>,
    pub link: Option<String>,
    pub social: Option<String>,
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
    table: "media",
    primary_key: "media_id",
    parent_key: Some("producer_id"),
    sort_fields: &["media_id", "producer_id", "page_url", "link", "social", "created_at"],
    filter_fields: &[
        FilterField::integer("producer_id"),
        FilterField::contains("page_url"),
        FilterField::contains("social"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.media_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMedia {
    pub producer_id: i32,
    pub page_url: Option<String>,
    pub link: Option<String>,
    pub social: Option<String>,
}

impl From<NewMedia> for ActiveModel {
    fn from(input: NewMedia) -> Self {
        ActiveModel {
            producer_id: Set(input.producer_id),
            page_url: Set(input.page_url),
            link: Set(input.link),
            social: Set(input.social),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
    }
}
