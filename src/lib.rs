//! fm-core
//!
//! Persistence core for the facility administration backend. It owns the
//! audited entity graph (plant/area/space/coordinate, device/model/asset,
//! descriptive vocabularies, situations and communicates), lifecycle
//! stamping, soft-delete semantics, temporal history and unit-of-work
//! transactional writes. Presentation, routing and authentication live
//! outside this crate and call in through the repository surface.

pub mod config;
pub mod infrastructure;
pub mod shared;

pub use infrastructure::database::{entities, Database};
pub use infrastructure::persistence::error::{PersistenceError, PersistenceResult};
pub use infrastructure::persistence::integrity::{
    DeletePolicy, IntegrityRules, AREA_SPACE, SPACE_COORDINATE,
};
pub use infrastructure::persistence::unit_of_work::UnitOfWork;
pub use shared::clock::{Clock, FixedClock, SystemClock};
pub use shared::identity::{Anonymous, IdentityContext, StaticIdentity, SYSTEM_ACTOR};
