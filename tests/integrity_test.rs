//! Referential integrity at delete time: restrict rules, configurable
//! policies and duplicate edge rejection.

mod helpers;

use fm_core::entities::{
    area, category, plant, situation, situation_category, space,
};
use fm_core::{DeletePolicy, IntegrityRules, PersistenceError};

#[tokio::test]
async fn plant_with_active_area_is_restricted() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let plant_id = uow.plants().create(plant::Model::new("P1"));
    let area_id = uow.areas().create(area::Model::new(plant_id, "A1"));
    uow.commit().await.unwrap();

    let uow = bed.uow("alice");
    uow.plants().mark_deleted(plant_id);
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::ReferentialIntegrity(_)));

    // Soft-deleting the child first clears the way.
    let uow = bed.uow("alice");
    uow.areas().mark_deleted(area_id);
    uow.commit().await.unwrap();

    let uow = bed.uow("alice");
    uow.plants().mark_deleted(plant_id);
    uow.commit().await.unwrap();

    let stored = uow.plants().get_by_id(plant_id, true).await.unwrap();
    assert!(stored.deleted);
}

#[tokio::test]
async fn child_delete_and_parent_delete_compose_in_one_commit() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let plant_id = uow.plants().create(plant::Model::new("P1"));
    let area_id = uow.areas().create(area::Model::new(plant_id, "A1"));
    uow.commit().await.unwrap();

    // Deletes run children-first, so an explicit cascade staged in any
    // order lands atomically.
    let uow = bed.uow("alice");
    uow.plants().mark_deleted(plant_id);
    uow.areas().mark_deleted(area_id);
    uow.commit().await.unwrap();

    assert!(uow.plants().get_by_id(plant_id, true).await.unwrap().deleted);
    assert!(uow.areas().get_by_id(area_id, true).await.unwrap().deleted);
}

#[tokio::test]
async fn area_space_defaults_to_no_action() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let plant_id = uow.plants().create(plant::Model::new("P1"));
    let area_id = uow.areas().create(area::Model::new(plant_id, "A1"));
    let space_id = uow.spaces().create(space::Model::new(area_id, "S1"));
    uow.commit().await.unwrap();

    // Default policy leaves spaces to the caller.
    let uow = bed.uow("alice");
    uow.areas().mark_deleted(area_id);
    uow.commit().await.unwrap();

    let orphan = uow.spaces().get_by_id(space_id, false).await.unwrap();
    assert!(!orphan.deleted);
}

#[tokio::test]
async fn integrity_rules_are_configuration() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let plant_id = uow.plants().create(plant::Model::new("P1"));
    let area_id = uow.areas().create(area::Model::new(plant_id, "A1"));
    uow.spaces().create(space::Model::new(area_id, "S1"));
    uow.commit().await.unwrap();

    // The same delete under a stricter rule set is refused.
    let mut rules = IntegrityRules::default();
    rules.set(fm_core::AREA_SPACE, DeletePolicy::Restrict);
    let uow = bed.uow_with_rules("alice", rules);
    uow.areas().mark_deleted(area_id);
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::ReferentialIntegrity(_)));
}

#[tokio::test]
async fn vocabulary_row_with_active_edges_is_restricted() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let situation_id = uow.situations().create(situation::Model::new("monthly inspection"));
    let category_id = uow.categories().create(category::Model::new("safety"));
    let edge_id = uow
        .situation_categories()
        .create(situation_category::Model::new(situation_id, category_id));
    uow.commit().await.unwrap();

    let uow = bed.uow("alice");
    uow.categories().mark_deleted(category_id);
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::ReferentialIntegrity(_)));

    // Removing the edge releases the vocabulary row.
    let uow = bed.uow("alice");
    uow.situation_categories().mark_deleted(edge_id);
    uow.categories().mark_deleted(category_id);
    uow.commit().await.unwrap();

    assert!(uow.categories().get_by_id(category_id, true).await.unwrap().deleted);
}

#[tokio::test]
async fn duplicate_edges_are_rejected() {
    let bed = helpers::setup().await;

    let uow = bed.uow("alice");
    let situation_id = uow.situations().create(situation::Model::new("audit"));
    let category_id = uow.categories().create(category::Model::new("electrical"));
    uow.situation_categories()
        .create(situation_category::Model::new(situation_id, category_id));
    uow.commit().await.unwrap();

    let uow = bed.uow("alice");
    uow.situation_categories()
        .create(situation_category::Model::new(situation_id, category_id));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));

    // The same pair staged twice in one unit of work fails the batch too.
    let uow = bed.uow("alice");
    let other = uow.categories().create(category::Model::new("mechanical"));
    uow.situation_categories()
        .create(situation_category::Model::new(situation_id, other));
    uow.situation_categories()
        .create(situation_category::Model::new(situation_id, other));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));

    let edges = uow
        .situation_categories()
        .list_by_situation(situation_id, false)
        .await
        .unwrap();
    assert_eq!(edges.len(), 1);
}
