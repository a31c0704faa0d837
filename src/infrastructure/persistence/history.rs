//! Temporal history: append-only prior row images with point-in-time reads.
//!
//! Capture happens inside the transaction that supersedes the image, so the
//! primary write and its history row land atomically or not at all. Reads
//! reconstruct a row "as of" an instant: the live row when the instant is at
//! or after the last change, otherwise the revision whose validity range
//! covers it.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::audit::AuditedEntity;
use super::error::PersistenceError;
use crate::infrastructure::database::entities as ent;

/// Record the image `prior` held from its last change until `valid_to`.
pub(crate) async fn record<M: AuditedEntity>(
    txn: &DatabaseTransaction,
    prior: &M,
    valid_to: DateTime<Utc>,
) -> Result<(), PersistenceError> {
    let image = serde_json::to_value(prior)
        .map_err(|e| DbErr::Custom(format!("unserializable {} row image: {}", M::NAME, e)))?;

    let revision = ent::revision::ActiveModel {
        id: NotSet,
        entity: Set(M::NAME.to_string()),
        entity_uuid: Set(prior.uuid()),
        data: Set(image),
        valid_from: Set(prior.updated_at()),
        valid_to: Set(valid_to),
    };
    revision.insert(txn).await?;
    Ok(())
}

/// Reconstruct the row as it existed at `at`. Soft-deleted states are part
/// of the historical record, so no delete filter applies here.
pub async fn as_of<M, C>(conn: &C, id: Uuid, at: DateTime<Utc>) -> Result<M, PersistenceError>
where
    M: AuditedEntity,
    C: ConnectionTrait,
{
    if let Some(current) = M::fetch(conn, id, true).await? {
        if at >= current.updated_at() {
            return Ok(current);
        }
    }

    let revision = ent::revision::Entity::find()
        .filter(ent::revision::Column::Entity.eq(M::NAME))
        .filter(ent::revision::Column::EntityUuid.eq(id))
        .filter(ent::revision::Column::ValidFrom.lte(at))
        .filter(ent::revision::Column::ValidTo.gt(at))
        .order_by_desc(ent::revision::Column::Id)
        .one(conn)
        .await?;

    match revision {
        Some(row) => serde_json::from_value(row.data).map_err(|e| {
            PersistenceError::Storage(DbErr::Custom(format!(
                "corrupt {} revision image for {}: {}",
                M::NAME,
                id,
                e
            )))
        }),
        None => Err(PersistenceError::NotFound {
            entity: M::NAME,
            id,
        }),
    }
}

/// Every retained prior image for the row, oldest first.
pub async fn revisions_for<M, C>(
    conn: &C,
    id: Uuid,
) -> Result<Vec<ent::revision::Model>, PersistenceError>
where
    M: AuditedEntity,
    C: ConnectionTrait,
{
    Ok(ent::revision::Entity::find()
        .filter(ent::revision::Column::Entity.eq(M::NAME))
        .filter(ent::revision::Column::EntityUuid.eq(id))
        .order_by_asc(ent::revision::Column::Id)
        .all(conn)
        .await?)
}
