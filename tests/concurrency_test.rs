//! Optimistic concurrency: the second writer over a stale row version
//! fails instead of applying a lost update.

mod helpers;

use chrono::Duration;
use fm_core::entities::plant;
use fm_core::PersistenceError;

#[tokio::test]
async fn stale_row_version_conflicts_on_commit() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    // Two units of work load the same row.
    let uow_a = bed.uow("alice");
    let uow_b = bed.uow("bob");
    let mut loaded_a = uow_a.plants().get_by_id(id, false).await.unwrap();
    let mut loaded_b = uow_b.plants().get_by_id(id, false).await.unwrap();

    bed.clock.advance(Duration::minutes(1));

    // Each mutates a different field; the first commit wins.
    loaded_a.name = "P1 by alice".to_string();
    uow_a.plants().update(loaded_a);
    uow_a.commit().await.unwrap();

    loaded_b.note = Some("bob's note".to_string());
    uow_b.plants().update(loaded_b);
    let err = uow_b.commit().await.unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::ConcurrencyConflict { entity: "plant", .. }
    ));

    // The winner's write is intact, the loser's never landed.
    let stored = uow_b.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.name, "P1 by alice");
    assert_eq!(stored.note, None);
    assert_eq!(stored.row_version, 2);
}

#[tokio::test]
async fn reload_after_conflict_succeeds() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let id = uow.plants().create(plant::Model::new("P1"));
    uow.commit().await.unwrap();

    let uow_a = bed.uow("alice");
    let uow_b = bed.uow("bob");
    let mut loaded_a = uow_a.plants().get_by_id(id, false).await.unwrap();
    let stale = uow_b.plants().get_by_id(id, false).await.unwrap();

    loaded_a.name = "P1 v2".to_string();
    uow_a.plants().update(loaded_a);
    uow_a.commit().await.unwrap();

    let mut conflicted = stale;
    conflicted.note = Some("late".to_string());
    uow_b.plants().update(conflicted);
    assert!(uow_b.commit().await.is_err());

    // The caller reloads fresh state and retries as a new decision.
    let uow_b = bed.uow("bob");
    let mut fresh = uow_b.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(fresh.name, "P1 v2");
    fresh.note = Some("late".to_string());
    uow_b.plants().update(fresh);
    uow_b.commit().await.unwrap();

    let stored = uow_b.plants().get_by_id(id, false).await.unwrap();
    assert_eq!(stored.name, "P1 v2");
    assert_eq!(stored.note.as_deref(), Some("late"));
    assert_eq!(stored.row_version, 3);
}
