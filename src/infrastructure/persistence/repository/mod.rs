//! Per-aggregate repositories over the unit of work.
//!
//! Each repository stages writes (`create`/`update`/`mark_deleted`/
//! `un_delete`) against its unit of work and serves reads (`get_by_id`,
//! `list`, finders, `as_of`) straight from the committed state. Join
//! entities get repositories of their own, since their rows carry full
//! lifecycle fields.

mod communicate;
mod equipment;
mod location;
mod situation;
mod vocabulary;

pub use communicate::{
    CommunicateAreaRepository, CommunicateAssetRepository, CommunicateCategoryRepository,
    CommunicateCoordinateRepository, CommunicateDeviceRepository, CommunicateModelRepository,
    CommunicateRepository, CommunicateSpaceRepository,
};
pub use equipment::{
    AssetCategoryRepository, AssetDetailRepository, AssetRepository, DeviceRepository,
    ModelParameterRepository, ModelRepository,
};
pub use location::{AreaRepository, CoordinateRepository, PlantRepository, SpaceRepository};
pub use situation::{
    SituationAssetRepository, SituationCategoryRepository, SituationDetailRepository,
    SituationDeviceRepository, SituationParameterRepository, SituationQuestionRepository,
    SituationRepository,
};
pub use vocabulary::{
    CategoryRepository, DetailRepository, ParameterRepository, QuestionRepository,
};

/// Defines a repository type for one entity module: staged writes, direct
/// reads and optional parent-scoped finders (`finder by FkColumn`).
macro_rules! repository_for {
    (
        $(#[$meta:meta])*
        $name:ident, $m:ident
        $(, finders: { $( $fname:ident by $col:ident ),* } )?
    ) => {
        $(#[$meta])*
        pub struct $name<'a> {
            uow: &'a UnitOfWork,
        }

        impl<'a> $name<'a> {
            pub fn new(uow: &'a UnitOfWork) -> Self {
                Self { uow }
            }

            /// Stage an insert. The public uuid is returned immediately; the
            /// row is written at commit.
            pub fn create(&self, mut model: ent::$m::Model) -> Uuid {
                if model.uuid.is_nil() {
                    model.uuid = Uuid::new_v4();
                }
                self.uow.stage_create(model)
            }

            /// Stage an update of a previously loaded row.
            pub fn update(&self, model: ent::$m::Model) {
                self.uow.stage_update(model);
            }

            /// Stage a soft delete.
            pub fn mark_deleted(&self, id: Uuid) {
                self.uow.stage_mark_deleted::<ent::$m::Model>(id);
            }

            /// Stage a restore.
            pub fn un_delete(&self, id: Uuid) {
                self.uow.stage_un_delete::<ent::$m::Model>(id);
            }

            pub async fn get_by_id(
                &self,
                id: Uuid,
                include_deleted: bool,
            ) -> Result<ent::$m::Model, PersistenceError> {
                <ent::$m::Model as AuditedEntity>::fetch(self.uow.conn(), id, include_deleted)
                    .await?
                    .ok_or(PersistenceError::NotFound {
                        entity: <ent::$m::Model as AuditedEntity>::NAME,
                        id,
                    })
            }

            pub async fn list(
                &self,
                include_deleted: bool,
            ) -> Result<Vec<ent::$m::Model>, PersistenceError> {
                <ent::$m::Model as AuditedEntity>::list_all(self.uow.conn(), include_deleted)
                    .await
            }

            /// Reconstruct the row as it existed at `at`.
            pub async fn as_of(
                &self,
                id: Uuid,
                at: DateTime<Utc>,
            ) -> Result<ent::$m::Model, PersistenceError> {
                history::as_of::<ent::$m::Model, _>(self.uow.conn(), id, at).await
            }

            /// Retained prior row images, oldest first.
            pub async fn revisions(
                &self,
                id: Uuid,
            ) -> Result<Vec<ent::revision::Model>, PersistenceError> {
                history::revisions_for::<ent::$m::Model, _>(self.uow.conn(), id).await
            }

            $($(
                pub async fn $fname(
                    &self,
                    parent: Uuid,
                    include_deleted: bool,
                ) -> Result<Vec<ent::$m::Model>, PersistenceError> {
                    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

                    let mut query =
                        ent::$m::Entity::find().filter(ent::$m::Column::$col.eq(parent));
                    if !include_deleted {
                        query = query.filter(ent::$m::Column::Deleted.eq(false));
                    }
                    Ok(query
                        .order_by_asc(ent::$m::Column::Id)
                        .all(self.uow.conn())
                        .await?)
                }
            )*)?
        }
    };
}

pub(crate) use repository_for;
