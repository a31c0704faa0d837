//! Lifecycle stamping: creation and update actor/time, sentinel fallback,
//! field validation and parent checks at commit time.

mod helpers;

use chrono::Duration;
use fm_core::entities::{area, plant};
use fm_core::{PersistenceError, SYSTEM_ACTOR};

#[tokio::test]
async fn create_stamps_creation_and_update_equally() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    let stored = uow.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.created_by, "alice");
    assert_eq!(stored.updated_by, "alice");
    assert_eq!(stored.created_at, helpers::t0());
    assert_eq!(stored.updated_at, helpers::t0());
    assert_eq!(stored.row_version, 1);
    assert!(!stored.deleted);
}

#[tokio::test]
async fn update_restamps_without_touching_creation_fields() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(10));
    let t1 = helpers::t0() + Duration::minutes(10);

    let uow = bed.uow("bob");
    let mut loaded = uow.plants().get_by_id(id, false).await.unwrap();
    loaded.name = "P1 renamed".to_string();
    uow.plants().update(loaded);
    uow.commit().await.unwrap();

    let stored = uow.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.name, "P1 renamed");
    assert_eq!(stored.created_by, "alice");
    assert_eq!(stored.created_at, helpers::t0());
    assert_eq!(stored.updated_by, "bob");
    assert_eq!(stored.updated_at, t1);
    assert_eq!(stored.row_version, 2);
}

#[tokio::test]
async fn missing_identity_stamps_the_system_sentinel() {
    let bed = helpers::setup().await;

    let uow = bed.uow_anonymous();
    let id = uow.plants().create(plant::Model::new("unattended import"));
    uow.commit().await.unwrap();

    let stored = uow.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.created_by, SYSTEM_ACTOR);
    assert_eq!(stored.updated_by, SYSTEM_ACTOR);
}

#[tokio::test]
async fn blank_required_field_fails_the_whole_commit() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    uow.plants().create(plant::Model::new("P1"));
    uow.plants().create(plant::Model::new("   "));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));

    // The valid sibling rolled back with the batch.
    assert!(uow.plants().list(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn child_of_missing_or_deleted_parent_is_rejected() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    uow.areas()
        .create(area::Model::new(uuid::Uuid::new_v4(), "orphan"));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));

    let uow = bed.uow("alice");
    let plant_id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    let uow = bed.uow("alice");
    uow.plants().mark_deleted(plant_id);
    uow.commit().await.unwrap();

    let uow = bed.uow("alice");
    uow.areas().create(area::Model::new(plant_id, "A1"));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));
}
