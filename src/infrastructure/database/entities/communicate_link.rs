//! Join entities hanging off Communicate.
//!
//! A notice is scoped to areas, spaces, coordinates, devices, models, assets
//! and categories; each edge is a full audited row and the
//! (communicate, other) pair is unique.

pub mod communicate_area {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_areas")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
        pub area_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::area::Entity",
            from = "Column::AreaUuid",
            to = "super::super::area::Column::Uuid"
        )]
        Area,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, area_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
                area_uuid,
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

pub mod communicate_space {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_spaces")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
        pub space_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::space::Entity",
            from = "Column::SpaceUuid",
            to = "super::super::space::Column::Uuid"
        )]
        Space,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, space_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
                space_uuid,
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

pub mod communicate_coordinate {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_coordinates")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
        pub coordinate_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::coordinate::Entity",
            from = "Column::CoordinateUuid",
            to = "super::super::coordinate::Column::Uuid"
        )]
        Coordinate,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, coordinate_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
                coordinate_uuid,
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

pub mod communicate_device {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_devices")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
        pub device_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::device::Entity",
            from = "Column::DeviceUuid",
            to = "super::super::device::Column::Uuid"
        )]
        Device,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, device_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
                device_uuid,
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

pub mod communicate_model {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_models")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
        pub model_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::model::Entity",
            from = "Column::ModelUuid",
            to = "super::super::model::Column::Uuid"
        )]
        Model,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, model_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
                model_uuid,
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

pub mod communicate_asset {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_assets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
        pub asset_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::asset::Entity",
            from = "Column::AssetUuid",
            to = "super::super::asset::Column::Uuid"
        )]
        Asset,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, asset_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
                asset_uuid,
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

pub mod communicate_category {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "communicate_categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub communicate_uuid: Uuid,
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
            belongs_to = "super::super::communicate::Entity",
            from = "Column::CommunicateUuid",
            to = "super::super::communicate::Column::Uuid"
        )]
        Communicate,
        #[sea_orm(
            belongs_to = "super::super::category::Entity",
            from = "Column::CategoryUuid",
            to = "super::super::category::Column::Uuid"
        )]
        Category,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(communicate_uuid: Uuid, category_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                communicate_uuid,
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
