//! Lifecycle stamping and the audited-entity contract.
//!
//! Every durable entity shares the audited column set: hybrid id/uuid
//! identity, creation and update actor/time, the soft-delete flag and the
//! optimistic `row_version`. [`AuditedEntity`] gives the unit of work a
//! uniform handle on that shape; `audited_entity!` implements it per entity
//! with the entity's relationships spelled out, so every commit-time check
//! runs as a concrete query against the transaction.
//!
//! Stamping rules:
//! - rows transitioning to *added* get creation and update fields set to the
//!   same stamp, `row_version = 1`;
//! - rows transitioning to *modified* (updates, soft deletes, restores) get
//!   update fields restamped while the creation columns stay out of the
//!   UPDATE statement entirely;
//! - every UPDATE carries a `row_version` predicate, so a stale writer fails
//!   with a concurrency conflict instead of applying a lost update.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::error::PersistenceError;
use super::history;
use super::integrity::{DeletePolicy, IntegrityRules};
use crate::infrastructure::database::entities as ent;
use crate::shared::clock::Clock;
use crate::shared::identity::{IdentityContext, SYSTEM_ACTOR};

/// Actor and instant applied to every row a commit touches.
#[derive(Debug, Clone)]
pub struct Stamp {
    pub actor: String,
    pub at: DateTime<Utc>,
}

impl Stamp {
    /// Resolve the stamp for one commit. A missing identity falls back to
    /// the system sentinel; stamping never blocks a write.
    pub fn resolve(identity: &dyn IdentityContext, clock: &dyn Clock) -> Self {
        let actor = identity
            .current_actor()
            .unwrap_or_else(|| SYSTEM_ACTOR.to_string());
        Self {
            actor,
            at: clock.now_utc(),
        }
    }
}

/// Uniform handle on the audited column set plus the entity-specific checks
/// the unit of work runs at commit time.
#[async_trait]
pub trait AuditedEntity:
    Clone + Send + Sync + serde::Serialize + serde::de::DeserializeOwned + 'static
{
    /// Entity name used in errors, history rows and log lines.
    const NAME: &'static str;
    /// Static dependency rank; parents sort before children, so staged
    /// inserts can be ordered without a cycle detector.
    const RANK: u8;

    fn uuid(&self) -> Uuid;
    fn is_deleted(&self) -> bool;
    fn row_version(&self) -> i64;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    /// Field-level constraints, checked before any statement is issued.
    fn validate(&self) -> Result<(), PersistenceError>;

    /// Every foreign key must reference an existing, non-deleted parent.
    async fn check_parents(
        txn: &DatabaseTransaction,
        model: &Self,
    ) -> Result<(), PersistenceError>;

    /// Restrict rules against active dependents, consulted on soft delete.
    async fn check_dependents(
        txn: &DatabaseTransaction,
        id: Uuid,
        rules: &IntegrityRules,
    ) -> Result<(), PersistenceError>;

    /// Join entities reject duplicate edges; plain entities have none.
    async fn check_duplicate_edge(
        txn: &DatabaseTransaction,
        model: &Self,
    ) -> Result<(), PersistenceError>;

    async fn fetch<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        include_deleted: bool,
    ) -> Result<Option<Self>, PersistenceError>;

    async fn list_all<C: ConnectionTrait>(
        conn: &C,
        include_deleted: bool,
    ) -> Result<Vec<Self>, PersistenceError>;

    async fn apply_insert(
        txn: &DatabaseTransaction,
        model: &Self,
        stamp: &Stamp,
    ) -> Result<(), PersistenceError>;

    async fn apply_update(
        txn: &DatabaseTransaction,
        model: &Self,
        stamp: &Stamp,
    ) -> Result<(), PersistenceError>;

    async fn apply_mark_deleted(
        txn: &DatabaseTransaction,
        id: Uuid,
        stamp: &Stamp,
        rules: &IntegrityRules,
    ) -> Result<(), PersistenceError>;

    async fn apply_un_delete(
        txn: &DatabaseTransaction,
        id: Uuid,
        stamp: &Stamp,
    ) -> Result<(), PersistenceError>;
}

/// Implements [`AuditedEntity`] for one entity module.
///
/// - `required`: string fields that must be non-empty;
/// - `parents`: `module => fk_field` pairs validated on insert, update and
///   restore;
/// - `dependents`: `module.FkColumn => "relationship"` rows counted before
///   a soft delete under the configured policy;
/// - `edge`: for join entities, the `field => Column` pair whose
///   combination must be unique;
/// - `validate`: optional extra validation function.
macro_rules! audited_entity {
    (
        $m:ident {
            name: $name:literal,
            rank: $rank:literal,
            required: [ $( $req:ident ),* ],
            parents: [ $( $pm:ident => $pfield:ident ),* ],
            dependents: [ $( $dm:ident . $dcol:ident => $rel:literal ),* ],
            edge: [ $( $lf:ident => $lc:ident, $rf:ident => $rc:ident )? ],
            validate: [ $( $vfn:path )? ]
        }
    ) => {
        #[async_trait]
        impl AuditedEntity for ent::$m::Model {
            const NAME: &'static str = $name;
            const RANK: u8 = $rank;

            fn uuid(&self) -> Uuid {
                self.uuid
            }

            fn is_deleted(&self) -> bool {
                self.deleted
            }

            fn row_version(&self) -> i64 {
                self.row_version
            }

            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            fn updated_at(&self) -> DateTime<Utc> {
                self.updated_at
            }

            fn validate(&self) -> Result<(), PersistenceError> {
                $(
                    if self.$req.trim().is_empty() {
                        return Err(PersistenceError::validation(format!(
                            "{} requires a non-empty {}",
                            $name,
                            stringify!($req)
                        )));
                    }
                )*
                $( $vfn(self)?; )?
                Ok(())
            }

            async fn check_parents(
                txn: &DatabaseTransaction,
                model: &Self,
            ) -> Result<(), PersistenceError> {
                $(
                    match ent::$pm::Entity::find()
                        .filter(ent::$pm::Column::Uuid.eq(model.$pfield))
                        .one(txn)
                        .await?
                    {
                        None => {
                            return Err(PersistenceError::validation(format!(
                                "{} {} references missing {} {}",
                                $name,
                                model.uuid,
                                stringify!($pm),
                                model.$pfield
                            )))
                        }
                        Some(parent) if parent.deleted => {
                            return Err(PersistenceError::validation(format!(
                                "{} {} references deleted {} {}",
                                $name,
                                model.uuid,
                                stringify!($pm),
                                model.$pfield
                            )))
                        }
                        Some(_) => {}
                    }
                )*
                let _ = (txn, model);
                Ok(())
            }

            async fn check_dependents(
                txn: &DatabaseTransaction,
                id: Uuid,
                rules: &IntegrityRules,
            ) -> Result<(), PersistenceError> {
                $(
                    if rules.policy($rel) == DeletePolicy::Restrict {
                        let active = ent::$dm::Entity::find()
                            .filter(ent::$dm::Column::$dcol.eq(id))
                            .filter(ent::$dm::Column::Deleted.eq(false))
                            .count(txn)
                            .await?;
                        if active > 0 {
                            return Err(PersistenceError::integrity(format!(
                                "{} {} still has {} active {} row(s)",
                                $name,
                                id,
                                active,
                                stringify!($dm)
                            )));
                        }
                    }
                )*
                let _ = (txn, id, rules);
                Ok(())
            }

            async fn check_duplicate_edge(
                txn: &DatabaseTransaction,
                model: &Self,
            ) -> Result<(), PersistenceError> {
                $(
                    let existing = ent::$m::Entity::find()
                        .filter(ent::$m::Column::$lc.eq(model.$lf))
                        .filter(ent::$m::Column::$rc.eq(model.$rf))
                        .count(txn)
                        .await?;
                    if existing > 0 {
                        return Err(PersistenceError::validation(format!(
                            "duplicate {} edge {} -> {}",
                            $name,
                            model.$lf,
                            model.$rf
                        )));
                    }
                )?
                let _ = (txn, model);
                Ok(())
            }

            async fn fetch<C: ConnectionTrait>(
                conn: &C,
                id: Uuid,
                include_deleted: bool,
            ) -> Result<Option<Self>, PersistenceError> {
                let mut query = ent::$m::Entity::find().filter(ent::$m::Column::Uuid.eq(id));
                if !include_deleted {
                    query = query.filter(ent::$m::Column::Deleted.eq(false));
                }
                Ok(query.one(conn).await?)
            }

            async fn list_all<C: ConnectionTrait>(
                conn: &C,
                include_deleted: bool,
            ) -> Result<Vec<Self>, PersistenceError> {
                let mut query = ent::$m::Entity::find();
                if !include_deleted {
                    query = query.filter(ent::$m::Column::Deleted.eq(false));
                }
                Ok(query.order_by_asc(ent::$m::Column::Id).all(conn).await?)
            }

            async fn apply_insert(
                txn: &DatabaseTransaction,
                model: &Self,
                stamp: &Stamp,
            ) -> Result<(), PersistenceError> {
                model.validate()?;
                Self::check_parents(txn, model).await?;
                Self::check_duplicate_edge(txn, model).await?;

                let mut row = model.clone().into_active_model();
                row.id = NotSet;
                row.created_at = Set(stamp.at);
                row.created_by = Set(stamp.actor.clone());
                row.updated_at = Set(stamp.at);
                row.updated_by = Set(stamp.actor.clone());
                row.deleted = Set(false);
                row.row_version = Set(1);
                row.insert(txn).await?;
                Ok(())
            }

            async fn apply_update(
                txn: &DatabaseTransaction,
                model: &Self,
                stamp: &Stamp,
            ) -> Result<(), PersistenceError> {
                let current = Self::fetch(txn, model.uuid, true).await?.ok_or(
                    PersistenceError::NotFound {
                        entity: $name,
                        id: model.uuid,
                    },
                )?;
                // A version of 0 marks a model staged right after its own
                // create in the same unit of work; loaded rows always carry
                // the stored version.
                if model.row_version != 0 && model.row_version != current.row_version {
                    return Err(PersistenceError::ConcurrencyConflict {
                        entity: $name,
                        id: model.uuid,
                    });
                }
                model.validate()?;
                Self::check_parents(txn, model).await?;

                history::record::<Self>(txn, &current, stamp.at).await?;

                let expected = current.row_version;
                let mut row = model.clone().into_active_model();
                row.id = NotSet;
                row.uuid = NotSet;
                row.created_at = NotSet;
                row.created_by = NotSet;
                row.deleted = NotSet;
                row.updated_at = Set(stamp.at);
                row.updated_by = Set(stamp.actor.clone());
                row.row_version = Set(expected + 1);
                let result = ent::$m::Entity::update_many()
                    .set(row)
                    .filter(ent::$m::Column::Uuid.eq(model.uuid))
                    .filter(ent::$m::Column::RowVersion.eq(expected))
                    .exec(txn)
                    .await?;
                if result.rows_affected == 0 {
                    return Err(PersistenceError::ConcurrencyConflict {
                        entity: $name,
                        id: model.uuid,
                    });
                }
                Ok(())
            }

            async fn apply_mark_deleted(
                txn: &DatabaseTransaction,
                id: Uuid,
                stamp: &Stamp,
                rules: &IntegrityRules,
            ) -> Result<(), PersistenceError> {
                let current = Self::fetch(txn, id, true)
                    .await?
                    .ok_or(PersistenceError::NotFound { entity: $name, id })?;
                if current.deleted {
                    return Ok(());
                }
                Self::check_dependents(txn, id, rules).await?;

                history::record::<Self>(txn, &current, stamp.at).await?;

                let expected = current.row_version;
                let mut row = current.into_active_model();
                row.id = NotSet;
                row.uuid = NotSet;
                row.created_at = NotSet;
                row.created_by = NotSet;
                row.deleted = Set(true);
                row.updated_at = Set(stamp.at);
                row.updated_by = Set(stamp.actor.clone());
                row.row_version = Set(expected + 1);
                let result = ent::$m::Entity::update_many()
                    .set(row)
                    .filter(ent::$m::Column::Uuid.eq(id))
                    .filter(ent::$m::Column::RowVersion.eq(expected))
                    .exec(txn)
                    .await?;
                if result.rows_affected == 0 {
                    return Err(PersistenceError::ConcurrencyConflict { entity: $name, id });
                }
                Ok(())
            }

            async fn apply_un_delete(
                txn: &DatabaseTransaction,
                id: Uuid,
                stamp: &Stamp,
            ) -> Result<(), PersistenceError> {
                let current = Self::fetch(txn, id, true)
                    .await?
                    .ok_or(PersistenceError::NotFound { entity: $name, id })?;
                if !current.deleted {
                    // Restoring an active row is a no-op success.
                    return Ok(());
                }
                // A row must not resurface under a deleted parent.
                Self::check_parents(txn, &current).await?;

                history::record::<Self>(txn, &current, stamp.at).await?;

                let expected = current.row_version;
                let mut row = current.into_active_model();
                row.id = NotSet;
                row.uuid = NotSet;
                row.created_at = NotSet;
                row.created_by = NotSet;
                row.deleted = Set(false);
                row.updated_at = Set(stamp.at);
                row.updated_by = Set(stamp.actor.clone());
                row.row_version = Set(expected + 1);
                let result = ent::$m::Entity::update_many()
                    .set(row)
                    .filter(ent::$m::Column::Uuid.eq(id))
                    .filter(ent::$m::Column::RowVersion.eq(expected))
                    .exec(txn)
                    .await?;
                if result.rows_affected == 0 {
                    return Err(PersistenceError::ConcurrencyConflict { entity: $name, id });
                }
                Ok(())
            }
        }
    };
}

fn communicate_window(model: &ent::communicate::Model) -> Result<(), PersistenceError> {
    if let (Some(starts_at), Some(ends_at)) = (model.starts_at, model.ends_at) {
        if ends_at < starts_at {
            return Err(PersistenceError::validation(
                "communicate window ends before it starts",
            ));
        }
    }
    Ok(())
}

// Location hierarchy.

audited_entity!(plant {
    name: "plant",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [area.PlantUuid => "plant.area"],
    edge: [],
    validate: []
});

audited_entity!(area {
    name: "area",
    rank: 1,
    required: [name],
    parents: [plant => plant_uuid],
    dependents: [
        space.AreaUuid => "area.space",
        communicate_area.AreaUuid => "area.communicate_area"
    ],
    edge: [],
    validate: []
});

audited_entity!(space {
    name: "space",
    rank: 2,
    required: [name],
    parents: [area => area_uuid],
    dependents: [
        coordinate.SpaceUuid => "space.coordinate",
        communicate_space.SpaceUuid => "space.communicate_space"
    ],
    edge: [],
    validate: []
});

audited_entity!(coordinate {
    name: "coordinate",
    rank: 3,
    required: [name],
    parents: [space => space_uuid],
    dependents: [
        asset.CoordinateUuid => "coordinate.asset",
        communicate_coordinate.CoordinateUuid => "coordinate.communicate_coordinate"
    ],
    edge: [],
    validate: []
});

// Equipment hierarchy.

audited_entity!(device {
    name: "device",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [
        model.DeviceUuid => "device.model",
        situation_device.DeviceUuid => "device.situation_device",
        communicate_device.DeviceUuid => "device.communicate_device"
    ],
    edge: [],
    validate: []
});

audited_entity!(model {
    name: "model",
    rank: 1,
    required: [name],
    parents: [device => device_uuid],
    dependents: [
        asset.ModelUuid => "model.asset",
        model_parameter.ModelUuid => "model.model_parameter",
        communicate_model.ModelUuid => "model.communicate_model"
    ],
    edge: [],
    validate: []
});

audited_entity!(asset {
    name: "asset",
    rank: 4,
    required: [name],
    parents: [model => model_uuid, coordinate => coordinate_uuid],
    dependents: [
        asset_category.AssetUuid => "asset.asset_category",
        asset_detail.AssetUuid => "asset.asset_detail",
        situation_asset.AssetUuid => "asset.situation_asset",
        communicate_asset.AssetUuid => "asset.communicate_asset"
    ],
    edge: [],
    validate: []
});

// Vocabularies.

audited_entity!(category {
    name: "category",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [
        asset_category.CategoryUuid => "category.asset_category",
        situation_category.CategoryUuid => "category.situation_category",
        communicate_category.CategoryUuid => "category.communicate_category"
    ],
    edge: [],
    validate: []
});

audited_entity!(detail {
    name: "detail",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [
        asset_detail.DetailUuid => "detail.asset_detail",
        situation_detail.DetailUuid => "detail.situation_detail"
    ],
    edge: [],
    validate: []
});

audited_entity!(parameter {
    name: "parameter",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [
        model_parameter.ParameterUuid => "parameter.model_parameter",
        situation_parameter.ParameterUuid => "parameter.situation_parameter"
    ],
    edge: [],
    validate: []
});

audited_entity!(question {
    name: "question",
    rank: 0,
    required: [text],
    parents: [],
    dependents: [situation_question.QuestionUuid => "question.situation_question"],
    edge: [],
    validate: []
});

// Situation and communicate roots.

audited_entity!(situation {
    name: "situation",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [
        situation_question.SituationUuid => "situation.situation_question",
        situation_detail.SituationUuid => "situation.situation_detail",
        situation_parameter.SituationUuid => "situation.situation_parameter",
        situation_category.SituationUuid => "situation.situation_category",
        situation_device.SituationUuid => "situation.situation_device",
        situation_asset.SituationUuid => "situation.situation_asset"
    ],
    edge: [],
    validate: []
});

audited_entity!(communicate {
    name: "communicate",
    rank: 0,
    required: [name],
    parents: [],
    dependents: [
        communicate_area.CommunicateUuid => "communicate.communicate_area",
        communicate_space.CommunicateUuid => "communicate.communicate_space",
        communicate_coordinate.CommunicateUuid => "communicate.communicate_coordinate",
        communicate_device.CommunicateUuid => "communicate.communicate_device",
        communicate_model.CommunicateUuid => "communicate.communicate_model",
        communicate_asset.CommunicateUuid => "communicate.communicate_asset",
        communicate_category.CommunicateUuid => "communicate.communicate_category"
    ],
    edge: [],
    validate: [communicate_window]
});

// Asset and model metadata edges.

audited_entity!(asset_category {
    name: "asset_category",
    rank: 5,
    required: [],
    parents: [asset => asset_uuid, category => category_uuid],
    dependents: [],
    edge: [asset_uuid => AssetUuid, category_uuid => CategoryUuid],
    validate: []
});

audited_entity!(asset_detail {
    name: "asset_detail",
    rank: 5,
    required: [],
    parents: [asset => asset_uuid, detail => detail_uuid],
    dependents: [],
    edge: [asset_uuid => AssetUuid, detail_uuid => DetailUuid],
    validate: []
});

audited_entity!(model_parameter {
    name: "model_parameter",
    rank: 5,
    required: [],
    parents: [model => model_uuid, parameter => parameter_uuid],
    dependents: [],
    edge: [model_uuid => ModelUuid, parameter_uuid => ParameterUuid],
    validate: []
});

// Situation graph edges.

audited_entity!(situation_question {
    name: "situation_question",
    rank: 5,
    required: [],
    parents: [situation => situation_uuid, question => question_uuid],
    dependents: [],
    edge: [situation_uuid => SituationUuid, question_uuid => QuestionUuid],
    validate: []
});

audited_entity!(situation_detail {
    name: "situation_detail",
    rank: 5,
    required: [],
    parents: [situation => situation_uuid, detail => detail_uuid],
    dependents: [],
    edge: [situation_uuid => SituationUuid, detail_uuid => DetailUuid],
    validate: []
});

audited_entity!(situation_parameter {
    name: "situation_parameter",
    rank: 5,
    required: [],
    parents: [situation => situation_uuid, parameter => parameter_uuid],
    dependents: [],
    edge: [situation_uuid => SituationUuid, parameter_uuid => ParameterUuid],
    validate: []
});

audited_entity!(situation_category {
    name: "situation_category",
    rank: 5,
    required: [],
    parents: [situation => situation_uuid, category => category_uuid],
    dependents: [],
    edge: [situation_uuid => SituationUuid, category_uuid => CategoryUuid],
    validate: []
});

audited_entity!(situation_device {
    name: "situation_device",
    rank: 5,
    required: [],
    parents: [situation => situation_uuid, device => device_uuid],
    dependents: [],
    edge: [situation_uuid => SituationUuid, device_uuid => DeviceUuid],
    validate: []
});

audited_entity!(situation_asset {
    name: "situation_asset",
    rank: 5,
    required: [],
    parents: [situation => situation_uuid, asset => asset_uuid],
    dependents: [],
    edge: [situation_uuid => SituationUuid, asset_uuid => AssetUuid],
    validate: []
});

// Communicate graph edges.

audited_entity!(communicate_area {
    name: "communicate_area",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, area => area_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, area_uuid => AreaUuid],
    validate: []
});

audited_entity!(communicate_space {
    name: "communicate_space",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, space => space_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, space_uuid => SpaceUuid],
    validate: []
});

audited_entity!(communicate_coordinate {
    name: "communicate_coordinate",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, coordinate => coordinate_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, coordinate_uuid => CoordinateUuid],
    validate: []
});

audited_entity!(communicate_device {
    name: "communicate_device",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, device => device_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, device_uuid => DeviceUuid],
    validate: []
});

audited_entity!(communicate_model {
    name: "communicate_model",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, model => model_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, model_uuid => ModelUuid],
    validate: []
});

audited_entity!(communicate_asset {
    name: "communicate_asset",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, asset => asset_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, asset_uuid => AssetUuid],
    validate: []
});

audited_entity!(communicate_category {
    name: "communicate_category",
    rank: 5,
    required: [],
    parents: [communicate => communicate_uuid, category => category_uuid],
    dependents: [],
    edge: [communicate_uuid => CommunicateUuid, category_uuid => CategoryUuid],
    validate: []
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::FixedClock;
    use crate::shared::identity::{Anonymous, StaticIdentity};

    #[test]
    fn stamp_uses_supplied_identity() {
        let clock = FixedClock::new(Utc::now());
        let stamp = Stamp::resolve(&StaticIdentity::new("alice"), &clock);
        assert_eq!(stamp.actor, "alice");
        assert_eq!(stamp.at, clock.now_utc());
    }

    #[test]
    fn stamp_falls_back_to_system_sentinel() {
        let clock = FixedClock::new(Utc::now());
        let stamp = Stamp::resolve(&Anonymous, &clock);
        assert_eq!(stamp.actor, SYSTEM_ACTOR);
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let plant = ent::plant::Model::new("  ");
        assert!(matches!(
            plant.validate(),
            Err(PersistenceError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_inverted_communicate_window() {
        let mut notice = ent::communicate::Model::new("maintenance window");
        notice.starts_at = Some(Utc::now());
        notice.ends_at = Some(Utc::now() - chrono::Duration::hours(1));
        assert!(matches!(
            notice.validate(),
            Err(PersistenceError::Validation(_))
        ));
    }
}
