//! End-to-end scenario: the full facility graph staged out of order in a
//! single commit, plus atomicity and timeout behavior.

mod helpers;

use std::time::Duration as StdDuration;

use fm_core::entities::{
    area, asset, coordinate, device, model, plant, space,
};
use fm_core::PersistenceError;

#[tokio::test]
async fn full_graph_lands_in_one_commit_regardless_of_staging_order() {
    let bed = helpers::setup().await;
    let uow = bed.uow("wizard");

    // Stage children before their parents; commit ordering sorts it out.
    let plant_model = plant::Model::new("P1");
    let area_model = area::Model::new(plant_model.uuid, "A1");
    let space_model = space::Model::new(area_model.uuid, "S1");
    let coordinate_model = coordinate::Model::new(space_model.uuid, "C1");
    let device_model = device::Model::new("pump");
    let model_model = model::Model::new(device_model.uuid, "PX-200");
    let asset_model = asset::Model::new(model_model.uuid, coordinate_model.uuid, "Widget");

    let asset_id = uow.assets().create(asset_model);
    let coordinate_id = uow.coordinates().create(coordinate_model);
    uow.spaces().create(space_model);
    uow.models().create(model_model);
    uow.areas().create(area_model);
    uow.devices().create(device_model);
    uow.plants().create(plant_model);
    assert_eq!(uow.staged_len(), 7);
    uow.commit().await.unwrap();

    let placed = uow
        .assets()
        .list_by_coordinate(coordinate_id, false)
        .await
        .unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].uuid, asset_id);
    assert_eq!(placed[0].name, "Widget");
    assert_eq!(placed[0].created_by, "wizard");
    assert_eq!(placed[0].created_at, helpers::t0());
}

#[tokio::test]
async fn one_bad_operation_rolls_back_the_whole_batch() {
    let bed = helpers::setup().await;
    let uow = bed.uow("alice");

    uow.plants().create(plant::Model::new("P2"));
    uow.areas()
        .create(area::Model::new(uuid::Uuid::new_v4(), "dangling"));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));

    assert!(uow.plants().list(true).await.unwrap().is_empty());
    assert!(uow.areas().list(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_placement_with_an_asset_is_restricted() {
    let bed = helpers::setup().await;
    let uow = bed.uow("alice");

    let plant_id = uow.plants().create(plant::Model::new("P1"));
    let area_id = uow.areas().create(area::Model::new(plant_id, "A1"));
    let space_id = uow.spaces().create(space::Model::new(area_id, "S1"));
    let coordinate_id = uow
        .coordinates()
        .create(coordinate::Model::new(space_id, "C1"));
    let device_id = uow.devices().create(device::Model::new("sensor"));
    let model_id = uow.models().create(model::Model::new(device_id, "T-10"));
    uow.assets()
        .create(asset::Model::new(model_id, coordinate_id, "Gauge"));
    uow.commit().await.unwrap();

    // An asset cannot be silently detached by deleting its placement.
    let uow = bed.uow("alice");
    uow.coordinates().mark_deleted(coordinate_id);
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::ReferentialIntegrity(_)));
}

#[tokio::test]
async fn commit_with_timeout_passes_results_through() {
    let bed = helpers::setup().await;
    let uow = bed.uow("alice");

    uow.plants().create(plant::Model::new("P1"));
    uow.commit_with_timeout(StdDuration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(uow.plants().list(false).await.unwrap().len(), 1);

    // An empty unit of work commits trivially.
    uow.commit_with_timeout(StdDuration::from_secs(5))
        .await
        .unwrap();
}
