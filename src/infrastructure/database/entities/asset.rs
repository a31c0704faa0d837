//! Asset entity - a physical unit of a model placed at a coordinate

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub model_uuid: Uuid,
    pub coordinate_uuid: Uuid,
    pub name: String,
    pub serial_no: Option<String>,
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
        belongs_to = "super::model::Entity",
        from = "Column::ModelUuid",
        to = "super::model::Column::Uuid"
    )]
    Model,
    #[sea_orm(
        belongs_to = "super::coordinate::Entity",
        from = "Column::CoordinateUuid",
        to = "super::coordinate::Column::Uuid"
    )]
    Coordinate,
}

impl Related<super::model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Model.def()
    }
}

impl Related<super::coordinate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coordinate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new(model_uuid: Uuid, coordinate_uuid: Uuid, name: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            model_uuid,
            coordinate_uuid,
            name: name.into(),
            serial_no: None,
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
