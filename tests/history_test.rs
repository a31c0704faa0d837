//! Temporal history: point-in-time reconstruction and transition capture.

mod helpers;

use chrono::Duration;
use fm_core::entities::plant;
use fm_core::PersistenceError;

#[tokio::test]
async fn as_of_reconstructs_each_prior_image() {
    let bed = helpers::setup().await;
    let t0 = helpers::t0();

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::hours(1));
    let t1 = t0 + Duration::hours(1);
    let uow = bed.uow("alice");
    let mut loaded = uow.plants().get_by_id(id, false).await.unwrap();
    loaded.name = "P1 second".to_string();
    uow.plants().update(loaded);
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::hours(1));
    let t2 = t1 + Duration::hours(1);
    let uow = bed.uow("alice");
    let mut loaded = uow.plants().get_by_id(id, false).await.unwrap();
    loaded.name = "P1 third".to_string();
    uow.plants().update(loaded);
    uow.commit().await.unwrap();

    let plants = uow.plants();
    assert_eq!(plants.as_of(id, t0).await.unwrap().name, "P1");
    assert_eq!(
        plants.as_of(id, t0 + Duration::minutes(30)).await.unwrap().name,
        "P1"
    );
    assert_eq!(plants.as_of(id, t1).await.unwrap().name, "P1 second");
    assert_eq!(plants.as_of(id, t2).await.unwrap().name, "P1 third");
    assert_eq!(
        plants.as_of(id, t2 + Duration::days(1)).await.unwrap().name,
        "P1 third"
    );

    // Before the row existed.
    let err = plants.as_of(id, t0 - Duration::hours(1)).await.unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound { .. }));

    let trail = plants.revisions(id).await.unwrap();
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0].valid_from, t0);
    assert_eq!(trail[0].valid_to, t1);
    assert_eq!(trail[1].valid_from, t1);
    assert_eq!(trail[1].valid_to, t2);
}

#[tokio::test]
async fn create_then_update_in_one_commit_captures_one_transition() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    let mut follow_up = plant::Model::new("P1 adjusted");
    follow_up.uuid = id;
    uow.plants().update(follow_up);
    uow.commit().await.unwrap();

    let stored = uow.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.name, "P1 adjusted");
    assert_eq!(stored.row_version, 2);

    // One transition, one image: the state between insert and update.
    let trail = uow.plants().revisions(id).await.unwrap();
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].data["name"], "P1");
}

#[tokio::test]
async fn soft_delete_and_restore_both_record_the_prior_image() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(1));
    let uow = bed.uow("alice");
    uow.plants().mark_deleted(id);
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(1));
    let uow = bed.uow("alice");
    uow.plants().un_delete(id);
    uow.commit().await.unwrap();

    let trail = uow.plants().revisions(id).await.unwrap();
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0].data["deleted"], false);
    assert_eq!(trail[1].data["deleted"], true);

    // The deleted interval is reconstructable.
    let mid_delete = helpers::t0() + Duration::seconds(90);
    let image = uow.plants().as_of(id, mid_delete).await.unwrap();
    assert!(image.deleted);
}

#[tokio::test]
async fn history_rolls_back_with_its_failing_commit() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    bed.clock.advance(Duration::minutes(1));

    // A valid update paired with a failing delete: nothing may land.
    let uow = bed.uow("bob");
    let mut loaded = uow.plants().get_by_id(id, false).await.unwrap();
    loaded.name = "half-applied".to_string();
    uow.plants().update(loaded);
    uow.areas().mark_deleted(uuid::Uuid::new_v4());
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound { .. }));

    let stored = uow.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.name, "P1");
    assert!(uow.plants().revisions(id).await.unwrap().is_empty());
}
