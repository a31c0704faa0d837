//! Join entities hanging off Asset: category links and detail values.
//!
//! Each edge is a full audited row; the (asset, other) pair is unique.

pub mod asset_category {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "asset_categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub asset_uuid: Uuid,
        pub category_uuid: Uuid,
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
            belongs_to = "super::super::asset::Entity",
            from = "Column::AssetUuid",
            to = "super::super::asset::Column::Uuid"
        )]
        Asset,
        #[sea_orm(
            belongs_to = "super::super::category::Entity",
            from = "Column::CategoryUuid",
            to = "super::super::category::Column::Uuid"
        )]
        Category,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(asset_uuid: Uuid, category_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                asset_uuid,
                category_uuid,
                created_at: now,
                created_by: String::new(),
                updated_at: now,
                updated_by: String::new(),
                deleted: false,
                row_version: 0,
            }
        }
    }
}

pub mod asset_detail {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "asset_details")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub asset_uuid: Uuid,
        pub detail_uuid: Uuid,
        /// Free-text value of the detail for this asset.
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
            belongs_to = "super::super::asset::Entity",
            from = "Column::AssetUuid",
            to = "super::super::asset::Column::Uuid"
        )]
        Asset,
        #[sea_orm(
            belongs_to = "super::super::detail::Entity",
            from = "Column::DetailUuid",
            to = "super::super::detail::Column::Uuid"
        )]
        Detail,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(asset_uuid: Uuid, detail_uuid: Uuid, value: impl Into<String>) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                asset_uuid,
                detail_uuid,
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
}
