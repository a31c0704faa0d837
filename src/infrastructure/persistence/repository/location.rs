//! Repositories for the location hierarchy.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::repository_for;
use crate::infrastructure::database::entities as ent;
use crate::infrastructure::persistence::audit::AuditedEntity;
use crate::infrastructure::persistence::error::PersistenceError;
use crate::infrastructure::persistence::history;
use crate::infrastructure::persistence::unit_of_work::UnitOfWork;

repository_for!(
    /// Plants, the roots of the location hierarchy.
    PlantRepository,
    plant
);

repository_for!(
    AreaRepository,
    area,
    finders: { list_by_plant by PlantUuid }
);

repository_for!(
    SpaceRepository,
    space,
    finders: { list_by_area by AreaUuid }
);

repository_for!(
    CoordinateRepository,
    coordinate,
    finders: { list_by_space by SpaceUuid }
);
