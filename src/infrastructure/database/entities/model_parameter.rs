//! ModelParameter join entity - a parameter value attached to a model

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "model_parameters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub model_uuid: Uuid,
    pub parameter_uuid: Uuid,
    /// Free-text value of the parameter for this model.
    pub value: String,
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
        belongs_to = "super::parameter::Entity",
        from = "Column::ParameterUuid",
        to = "super::parameter::Column::Uuid"
    )]
    Parameter,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new(model_uuid: Uuid, parameter_uuid: Uuid, value: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            model_uuid,
            parameter_uuid,
            value: value.into(),
            created_at: now,
            created_by: String::new(),
            updated_at: now,
            updated_by: String::new(),
            deleted: false,
            row_version: 0,
        }
    }
}
