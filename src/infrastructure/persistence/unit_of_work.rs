//! Unit of work: staged operations, dependency ordering, atomic commit.
//!
//! One instance belongs to one logical operation (one request equivalent)
//! and is never shared across concurrent callers. Repositories stage
//! operations; `commit` resolves a single lifecycle stamp, orders the queue
//! by dependency and applies everything inside one transaction. Either the
//! whole batch lands or none of it does.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{debug, warn};
use uuid::Uuid;

use super::audit::{AuditedEntity, Stamp};
use super::error::PersistenceError;
use super::integrity::IntegrityRules;
use super::repository::{
    AreaRepository, AssetCategoryRepository, AssetDetailRepository, AssetRepository,
    CategoryRepository, CommunicateAreaRepository, CommunicateAssetRepository,
    CommunicateCategoryRepository, CommunicateCoordinateRepository, CommunicateDeviceRepository,
    CommunicateModelRepository, CommunicateRepository, CommunicateSpaceRepository,
    CoordinateRepository, DetailRepository, DeviceRepository, ModelParameterRepository,
    ModelRepository, ParameterRepository, PlantRepository, QuestionRepository,
    SituationAssetRepository, SituationCategoryRepository, SituationDetailRepository,
    SituationDeviceRepository, SituationParameterRepository, SituationQuestionRepository,
    SituationRepository, SpaceRepository,
};
use crate::infrastructure::database::Database;
use crate::shared::clock::Clock;
use crate::shared::identity::IdentityContext;

/// Commit phases. Inserts run parents-first, then mutations, then deletes
/// children-first, so a staged batch can arrive in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    Insert,
    Mutate,
    Delete,
}

struct CommitEnv {
    stamp: Stamp,
    rules: IntegrityRules,
}

#[async_trait]
trait PendingOp: Send + Sync {
    fn entity(&self) -> &'static str;
    fn phase(&self) -> Phase;
    fn rank(&self) -> u8;
    async fn apply(
        &self,
        txn: &DatabaseTransaction,
        env: &CommitEnv,
    ) -> Result<(), PersistenceError>;
}

enum Staged<M> {
    Create(M),
    Update(M),
    MarkDeleted(Uuid),
    UnDelete(Uuid),
}

struct Pending<M: AuditedEntity>(Staged<M>);

#[async_trait]
impl<M: AuditedEntity> PendingOp for Pending<M> {
    fn entity(&self) -> &'static str {
        M::NAME
    }

    fn phase(&self) -> Phase {
        match &self.0 {
            Staged::Create(_) => Phase::Insert,
            Staged::Update(_) | Staged::UnDelete(_) => Phase::Mutate,
            Staged::MarkDeleted(_) => Phase::Delete,
        }
    }

    fn rank(&self) -> u8 {
        M::RANK
    }

    async fn apply(
        &self,
        txn: &DatabaseTransaction,
        env: &CommitEnv,
    ) -> Result<(), PersistenceError> {
        match &self.0 {
            Staged::Create(model) => M::apply_insert(txn, model, &env.stamp).await,
            Staged::Update(model) => M::apply_update(txn, model, &env.stamp).await,
            Staged::MarkDeleted(id) => {
                M::apply_mark_deleted(txn, *id, &env.stamp, &env.rules).await
            }
            Staged::UnDelete(id) => M::apply_un_delete(txn, *id, &env.stamp).await,
        }
    }
}

/// Inserts ascend the dependency ranks, deletes descend them; within one
/// key the staging order is preserved.
fn sort_key(op: &dyn PendingOp) -> (Phase, u8) {
    let rank = match op.phase() {
        Phase::Delete => u8::MAX - op.rank(),
        _ => op.rank(),
    };
    (op.phase(), rank)
}

/// Groups repository operations into one atomic commit.
pub struct UnitOfWork {
    db: Arc<Database>,
    identity: Arc<dyn IdentityContext>,
    clock: Arc<dyn Clock>,
    rules: IntegrityRules,
    staged: Mutex<Vec<Box<dyn PendingOp>>>,
}

impl UnitOfWork {
    /// Begin a unit of work with the default integrity rules. Tracking is
    /// implicit: staging starts immediately.
    pub fn new(
        db: Arc<Database>,
        identity: Arc<dyn IdentityContext>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_rules(db, identity, clock, IntegrityRules::default())
    }

    pub fn with_rules(
        db: Arc<Database>,
        identity: Arc<dyn IdentityContext>,
        clock: Arc<dyn Clock>,
        rules: IntegrityRules,
    ) -> Self {
        Self {
            db,
            identity,
            clock,
            rules,
            staged: Mutex::new(Vec::new()),
        }
    }

    /// Direct read access; reads see committed state only.
    pub fn conn(&self) -> &DatabaseConnection {
        self.db.conn()
    }

    /// Number of operations waiting for commit.
    pub fn staged_len(&self) -> usize {
        self.staged.lock().unwrap().len()
    }

    pub(crate) fn stage_create<M: AuditedEntity>(&self, model: M) -> Uuid {
        let id = model.uuid();
        self.push(Pending::<M>(Staged::Create(model)));
        id
    }

    pub(crate) fn stage_update<M: AuditedEntity>(&self, model: M) {
        self.push(Pending::<M>(Staged::Update(model)));
    }

    pub(crate) fn stage_mark_deleted<M: AuditedEntity>(&self, id: Uuid) {
        self.push(Pending::<M>(Staged::MarkDeleted(id)));
    }

    pub(crate) fn stage_un_delete<M: AuditedEntity>(&self, id: Uuid) {
        self.push(Pending::<M>(Staged::UnDelete(id)));
    }

    fn push<M: AuditedEntity>(&self, op: Pending<M>) {
        self.staged.lock().unwrap().push(Box::new(op));
    }

    /// Apply every staged operation atomically. On any failure the
    /// transaction rolls back and the queue is already drained, so a retry
    /// restages from scratch against fresh state.
    pub async fn commit(&self) -> Result<(), PersistenceError> {
        let mut ops: Vec<Box<dyn PendingOp>> = {
            let mut staged = self.staged.lock().unwrap();
            staged.drain(..).collect()
        };
        if ops.is_empty() {
            return Ok(());
        }
        ops.sort_by_key(|op| sort_key(op.as_ref()));

        let stamp = Stamp::resolve(self.identity.as_ref(), self.clock.as_ref());
        debug!(
            operations = ops.len(),
            actor = %stamp.actor,
            "committing unit of work"
        );
        let env = CommitEnv {
            stamp,
            rules: self.rules.clone(),
        };

        let txn = self.conn().begin().await?;
        for op in &ops {
            if let Err(err) = op.apply(&txn, &env).await {
                warn!(entity = op.entity(), %err, "rolling back unit of work");
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(%rollback_err, "rollback failed");
                }
                return Err(err);
            }
        }
        txn.commit().await?;
        Ok(())
    }

    /// Commit with a deadline. On expiry the whole unit of work is
    /// abandoned; there is no partial retry of individual operations.
    pub async fn commit_with_timeout(&self, limit: Duration) -> Result<(), PersistenceError> {
        match tokio::time::timeout(limit, self.commit()).await {
            Ok(result) => result,
            Err(_) => Err(PersistenceError::Timeout(limit)),
        }
    }

    // Per-aggregate repositories.

    pub fn plants(&self) -> PlantRepository<'_> {
        PlantRepository::new(self)
    }

    pub fn areas(&self) -> AreaRepository<'_> {
        AreaRepository::new(self)
    }

    pub fn spaces(&self) -> SpaceRepository<'_> {
        SpaceRepository::new(self)
    }

    pub fn coordinates(&self) -> CoordinateRepository<'_> {
        CoordinateRepository::new(self)
    }

    pub fn devices(&self) -> DeviceRepository<'_> {
        DeviceRepository::new(self)
    }

    pub fn models(&self) -> ModelRepository<'_> {
        ModelRepository::new(self)
    }

    pub fn assets(&self) -> AssetRepository<'_> {
        AssetRepository::new(self)
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self)
    }

    pub fn details(&self) -> DetailRepository<'_> {
        DetailRepository::new(self)
    }

    pub fn parameters(&self) -> ParameterRepository<'_> {
        ParameterRepository::new(self)
    }

    pub fn questions(&self) -> QuestionRepository<'_> {
        QuestionRepository::new(self)
    }

    pub fn situations(&self) -> SituationRepository<'_> {
        SituationRepository::new(self)
    }

    pub fn communicates(&self) -> CommunicateRepository<'_> {
        CommunicateRepository::new(self)
    }

    pub fn asset_categories(&self) -> AssetCategoryRepository<'_> {
        AssetCategoryRepository::new(self)
    }

    pub fn asset_details(&self) -> AssetDetailRepository<'_> {
        AssetDetailRepository::new(self)
    }

    pub fn model_parameters(&self) -> ModelParameterRepository<'_> {
        ModelParameterRepository::new(self)
    }

    pub fn situation_questions(&self) -> SituationQuestionRepository<'_> {
        SituationQuestionRepository::new(self)
    }

    pub fn situation_details(&self) -> SituationDetailRepository<'_> {
        SituationDetailRepository::new(self)
    }

    pub fn situation_parameters(&self) -> SituationParameterRepository<'_> {
        SituationParameterRepository::new(self)
    }

    pub fn situation_categories(&self) -> SituationCategoryRepository<'_> {
        SituationCategoryRepository::new(self)
    }

    pub fn situation_devices(&self) -> SituationDeviceRepository<'_> {
        SituationDeviceRepository::new(self)
    }

    pub fn situation_assets(&self) -> SituationAssetRepository<'_> {
        SituationAssetRepository::new(self)
    }

    pub fn communicate_areas(&self) -> CommunicateAreaRepository<'_> {
        CommunicateAreaRepository::new(self)
    }

    pub fn communicate_spaces(&self) -> CommunicateSpaceRepository<'_> {
        CommunicateSpaceRepository::new(self)
    }

    pub fn communicate_coordinates(&self) -> CommunicateCoordinateRepository<'_> {
        CommunicateCoordinateRepository::new(self)
    }

    pub fn communicate_devices(&self) -> CommunicateDeviceRepository<'_> {
        CommunicateDeviceRepository::new(self)
    }

    pub fn communicate_models(&self) -> CommunicateModelRepository<'_> {
        CommunicateModelRepository::new(self)
    }

    pub fn communicate_assets(&self) -> CommunicateAssetRepository<'_> {
        CommunicateAssetRepository::new(self)
    }

    pub fn communicate_categories(&self) -> CommunicateCategoryRepository<'_> {
        CommunicateCategoryRepository::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: &'static str,
        phase: Phase,
        rank: u8,
    }

    #[async_trait]
    impl PendingOp for Probe {
        fn entity(&self) -> &'static str {
            self.name
        }

        fn phase(&self) -> Phase {
            self.phase
        }

        fn rank(&self) -> u8 {
            self.rank
        }

        async fn apply(
            &self,
            _txn: &DatabaseTransaction,
            _env: &CommitEnv,
        ) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    #[test]
    fn inserts_ascend_and_deletes_descend_ranks() {
        let mut ops: Vec<Box<dyn PendingOp>> = vec![
            Box::new(Probe { name: "asset-insert", phase: Phase::Insert, rank: 4 }),
            Box::new(Probe { name: "plant-delete", phase: Phase::Delete, rank: 0 }),
            Box::new(Probe { name: "plant-insert", phase: Phase::Insert, rank: 0 }),
            Box::new(Probe { name: "area-delete", phase: Phase::Delete, rank: 1 }),
            Box::new(Probe { name: "area-update", phase: Phase::Mutate, rank: 1 }),
        ];
        ops.sort_by_key(|op| sort_key(op.as_ref()));

        let order: Vec<&str> = ops.iter().map(|op| op.entity()).collect();
        assert_eq!(
            order,
            vec![
                "plant-insert",
                "asset-insert",
                "area-update",
                "area-delete",
                "plant-delete"
            ]
        );
    }
}
