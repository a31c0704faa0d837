//! Soft-delete semantics: read-path filtering, restore, idempotence.

mod helpers;

use chrono::Duration;
use fm_core::entities::plant;
use fm_core::PersistenceError;

#[tokio::test]
async fn mark_deleted_hides_and_un_delete_restores() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(1));
    let t1 = helpers::t0() + Duration::minutes(1);

    let uow = bed.uow("bob");
    uow.plants().mark_deleted(id);
    uow.commit().await.unwrap();

    // Default read path filters the row out.
    let err = uow.plants().get_by_id(id, false).await.unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound { .. }));
    assert!(uow.plants().list(false).await.unwrap().is_empty());

    // The deleted-inclusive view still sees it, restamped by the delete.
    let hidden = uow.plants().get_by_id(id, true).await.unwrap();
    assert!(hidden.deleted);
    assert_eq!(hidden.updated_by, "bob");
    assert_eq!(hidden.updated_at, t1);
    assert_eq!(hidden.row_version, 2);
    assert_eq!(uow.plants().list(true).await.unwrap().len(), 1);

    bed.clock.advance(Duration::minutes(1));
    let t2 = t1 + Duration::minutes(1);

    let uow = bed.uow("carol");
    uow.plants().un_delete(id);
    uow.commit().await.unwrap();

    let restored = uow.plants().get_by_id(id, false).await.unwrap();
    assert!(!restored.deleted);
    assert_eq!(restored.updated_by, "carol");
    assert_eq!(restored.updated_at, t2);
    assert_eq!(restored.row_version, 3);
}

#[tokio::test]
async fn un_delete_of_active_row_is_a_noop_success() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(5));

    let uow = bed.uow("bob");
    uow.plants().un_delete(id);
    uow.commit().await.unwrap();

    // No second stamping pass happened.
    let stored = uow.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.updated_by, "alice");
    assert_eq!(stored.updated_at, helpers::t0());
    assert_eq!(stored.row_version, 1);
}

#[tokio::test]
async fn mark_deleted_twice_is_a_noop_success() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(1));
    let uow = bed.uow("bob");
    uow.plants().mark_deleted(id);
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(1));
    let uow = bed.uow("carol");
    uow.plants().mark_deleted(id);
    uow.commit().await.unwrap();

    let stored = uow.plants().get_by_id(id, true).await.unwrap();
    assert_eq!(stored.updated_by, "bob");
    assert_eq!(stored.row_version, 2);
}

#[tokio::test]
async fn operations_on_unknown_ids_surface_not_found() {
    let bed = helpers::setup().await;
    let ghost = uuid::Uuid::new_v4();

    let uow = bed.uow("alice");
    uow.plants().mark_deleted(ghost);
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound { .. }));

    let uow = bed.uow("alice");
    uow.plants().un_delete(ghost);
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound { .. }));

    let err = uow.plants().get_by_id(ghost, true).await.unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound { .. }));
}
