//! Append-only row-image history for audited entities.
//!
//! Each row stores the *prior* image of an entity and the half-open time
//! range `[valid_from, valid_to)` during which that image was current. Rows
//! are written in the same transaction as the change that superseded them
//! and are never edited or pruned by normal application flow.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "revisions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Entity kind the image belongs to, e.g. "plant".
    #[sea_orm(indexed)]
    pub entity: String,

    #[sea_orm(indexed)]
    pub entity_uuid: Uuid,

    /// Full column values of the prior row state.
    #[sea_orm(column_type = "Json")]
    pub data: Json,

    pub valid_from: DateTimeUtc,
    pub valid_to: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
