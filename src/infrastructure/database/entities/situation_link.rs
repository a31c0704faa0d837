//! Join entities hanging off Situation.
//!
//! A situation references questions, vocabularies, devices and assets; each
//! edge is a full audited row and the (situation, other) pair is unique.
//! SituationParameter additionally carries a free-text value.

pub mod situation_question {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "situation_questions")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub situation_uuid: Uuid,
        pub question_uuid: Uuid,
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
            belongs_to = "super::super::situation::Entity",
            from = "Column::SituationUuid",
            to = "super::super::situation::Column::Uuid"
        )]
        Situation,
        #[sea_orm(
            belongs_to = "super::super::question::Entity",
            from = "Column::QuestionUuid",
            to = "super::super::question::Column::Uuid"
        )]
        Question,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(situation_uuid: Uuid, question_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                situation_uuid,
                question_uuid,
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

pub mod situation_detail {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "situation_details")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub situation_uuid: Uuid,
        pub detail_uuid: Uuid,
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
            belongs_to = "super::super::situation::Entity",
            from = "Column::SituationUuid",
            to = "super::super::situation::Column::Uuid"
        )]
        Situation,
        #[sea_orm(
            belongs_to = "super::super::detail::Entity",
            from = "Column::DetailUuid",
            to = "super::super::detail::Column::Uuid"
        )]
        Detail,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(situation_uuid: Uuid, detail_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                situation_uuid,
                detail_uuid,
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

pub mod situation_parameter {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "situation_parameters")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub situation_uuid: Uuid,
        pub parameter_uuid: Uuid,
        /// Free-text value of the parameter in this situation.
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
            belongs_to = "super::super::situation::Entity",
            from = "Column::SituationUuid",
            to = "super::super::situation::Column::Uuid"
        )]
        Situation,
        #[sea_orm(
            belongs_to = "super::super::parameter::Entity",
            from = "Column::ParameterUuid",
            to = "super::super::parameter::Column::Uuid"
        )]
        Parameter,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(situation_uuid: Uuid, parameter_uuid: Uuid, value: impl Into<String>) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                situation_uuid,
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
}

pub mod situation_category {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "situation_categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub situation_uuid: Uuid,
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
            belongs_to = "super::super::situation::Entity",
            from = "Column::SituationUuid",
            to = "super::super::situation::Column::Uuid"
        )]
        Situation,
        #[sea_orm(
            belongs_to = "super::super::category::Entity",
            from = "Column::CategoryUuid",
            to = "super::super::category::Column::Uuid"
        )]
        Category,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(situation_uuid: Uuid, category_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                situation_uuid,
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

pub mod situation_device {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "situation_devices")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub situation_uuid: Uuid,
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
            belongs_to = "super::super::situation::Entity",
            from = "Column::SituationUuid",
            to = "super::super::situation::Column::Uuid"
        )]
        Situation,
        #[sea_orm(
            belongs_to = "super::super::device::Entity",
            from = "Column::DeviceUuid",
            to = "super::super::device::Column::Uuid"
        )]
        Device,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(situation_uuid: Uuid, device_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                situation_uuid,
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

pub mod situation_asset {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "situation_assets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub situation_uuid: Uuid,
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
            belongs_to = "super::super::situation::Entity",
            from = "Column::SituationUuid",
            to = "super::super::situation::Column::Uuid"
        )]
        Situation,
        #[sea_orm(
            belongs_to = "super::super::asset::Entity",
            from = "Column::AssetUuid",
            to = "super::super::asset::Column::Uuid"
        )]
        Asset,
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn new(situation_uuid: Uuid, asset_uuid: Uuid) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: 0,
                uuid: Uuid::new_v4(),
                situation_uuid,
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
