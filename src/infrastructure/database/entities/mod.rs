//! SeaORM entity definitions for the facility graph.
//!
//! Every audited table shares the same lifecycle columns: hybrid `id`/`uuid`
//! identity, creation and update actor/time, the soft-delete flag and the
//! optimistic `row_version`. Cross-entity references carry the parent `uuid`
//! so rows staged in the same unit of work can point at each other before
//! any auto-increment id exists.

pub mod area;
pub mod asset;
pub mod category;
pub mod communicate;
pub mod coordinate;
pub mod detail;
pub mod device;
pub mod model;
pub mod parameter;
pub mod plant;
pub mod question;
pub mod situation;
pub mod space;

pub mod asset_link;
pub mod communicate_link;
pub mod model_parameter;
pub mod situation_link;

pub mod revision;

// Join-entity modules, re-exported flat.
pub use asset_link::{asset_category, asset_detail};
pub use communicate_link::{
    communicate_area, communicate_asset, communicate_category, communicate_coordinate,
    communicate_device, communicate_model, communicate_space,
};
pub use situation_link::{
    situation_asset, situation_category, situation_detail, situation_device,
    situation_parameter, situation_question,
};

// Re-export the primary entities.
pub use area::Entity as Area;
pub use asset::Entity as Asset;
pub use category::Entity as Category;
pub use communicate::Entity as Communicate;
pub use coordinate::Entity as Coordinate;
pub use detail::Entity as Detail;
pub use device::Entity as Device;
pub use model::Entity as EquipmentModel;
pub use parameter::Entity as Parameter;
pub use plant::Entity as Plant;
pub use question::Entity as Question;
pub use revision::Entity as Revision;
pub use situation::Entity as Situation;
pub use space::Entity as Space;
