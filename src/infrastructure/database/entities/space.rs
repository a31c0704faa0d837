//! Space entity - a room or zone inside an area

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "spaces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub area_uuid: Uuid,
    pub name: String,
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
    pub created_by: String,
    pub updated_at: DateTimeUtc,
    pub updated_by: String,
    pub deleted: bool,
    pub row_version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaUuid",
        to = "super::area::Column::Uuid"
    )]
    Area,
    #[sea_orm(has_many = "super::coordinate::Entity")]
    Coordinate,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::coordinate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coordinate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new(area_uuid: Uuid, name: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            area_uuid,
            name: name.into(),
            note: None,
            created_at: now,
            created_by: String::new(),
            updated_at: now,
            updated_by: String::new(),
            deleted: false,
            row_version: 0,
        }
    }
}
