use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "license")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub license_id: i32,
    pub producer_id: i32,
    pub license_type: Option<String>,
    pub date_licensed: Option<String>,
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
    table: "license",
    primary_key: "license_id",
    parent_key: Some("producer_id"),
    sort_fields: &["license_id", "license_type", "date_licensed", "producer_id"],
    filter_fields: &[
        FilterField::integer("producer_id"),
        FilterField::exact("license_type"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.license_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLicense {
    pub producer_id: i32,
    pub license_type: Option<String>,
    pub date_licensed: Option<String>,
}

impl From<NewLicense> for ActiveModel {
    fn from(input: NewLicense) -> Self {
        ActiveModel {
            producer_id: Set(input.producer_id),
            license_type: Set(input.license_type),
            date_licensed: Set(input.date_licensed),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
    }
}
