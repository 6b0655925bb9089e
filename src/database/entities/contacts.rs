use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::query::{CatalogEntity, EntityDescriptor, FilterField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub contact_id: i32,
    pub producer_id: i32,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_name = "phone_2")]
    pub phone_2: Option<String>,
    pub email: Option<String>,
    pub email_private: Option<String>,
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
    table: "contact",
    primary_key: "contact_id",
    parent_key: Some("producer_id"),
    sort_fields: &[
        "contact_id",
        "contact_name",
        "email",
        "phone",
        "phone_2",
        "producer_id",
        "created_at",
    ],
    filter_fields: &[
        FilterField::integer("producer_id"),
        FilterField::contains("contact_name"),
        FilterField::exact("email"),
    ],
    child_order: None,
};

impl CatalogEntity for Entity {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn record_id(model: &Model) -> i32 {
        model.contact_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    pub producer_id: i32,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub phone_2: Option<String>,
    pub email: Option<String>,
    pub email_private: Option<String>,
}

impl From<NewContact> for ActiveModel {
    fn from(input: NewContact) -> Self {
        ActiveModel {
            producer_id: Set(input.producer_id),
            contact_name: Set(input.contact_name),
            phone: Set(input.phone),
            phone_2: Set(input.phone_2),
            email: Set(input.email),
            email_private: Set(input.email_private),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
    }
}
