//! Error taxonomy for the persistence layer.

use sea_orm::DbErr;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Failure kinds surfaced by repositories and the unit of work.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Caller-supplied entity violates a field constraint or references a
    /// deleted/missing parent. Recoverable by the caller; never retried here.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Row version mismatch at commit time. The caller should reload and
    /// re-evaluate; the layer never retries on its own.
    #[error("concurrent update detected on {entity} {id}")]
    ConcurrencyConflict { entity: &'static str, id: Uuid },

    /// The operation would orphan dependents under a restrict rule.
    #[error("referential integrity violated: {0}")]
    ReferentialIntegrity(String),

    /// The id does not exist, or is hidden by the soft-delete filter.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// The storage engine failed for reasons outside the above.
    #[error("storage failure: {0}")]
    Storage(#[from] DbErr),

    /// The unit of work was abandoned at the caller-supplied deadline.
    #[error("commit abandoned after {0:?}")]
    Timeout(Duration),
}

impl PersistenceError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn integrity(msg: impl Into<String>) -> Self {
        Self::ReferentialIntegrity(msg.into())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
