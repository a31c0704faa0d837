//! Repositories for communicates and their graph edges.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::repository_for;
use crate::infrastructure::database::entities as ent;
use crate::infrastructure::persistence::audit::AuditedEntity;
use crate::infrastructure::persistence::error::PersistenceError;
use crate::infrastructure::persistence::history;
use crate::infrastructure::persistence::unit_of_work::UnitOfWork;

repository_for!(CommunicateRepository, communicate);

repository_for!(
    CommunicateAreaRepository,
    communicate_area,
    finders: { list_by_communicate by CommunicateUuid }
);

repository_for!(
    CommunicateSpaceRepository,
    communicate_space,
    finders: { list_by_communicate by CommunicateUuid }
);

repository_for!(
    CommunicateCoordinateRepository,
    communicate_coordinate,
    finders: { list_by_communicate by CommunicateUuid }
);

repository_for!(
    CommunicateDeviceRepository,
    communicate_device,
    finders: { list_by_communicate by CommunicateUuid }
);

repository_for!(
    CommunicateModelRepository,
    communicate_model,
    finders: { list_by_communicate by CommunicateUuid }
);

repository_for!(
    CommunicateAssetRepository,
    communicate_asset,
    finders: { list_by_communicate by CommunicateUuid }
);

repository_for!(
    CommunicateCategoryRepository,
    communicate_category,
    finders: { list_by_communicate by CommunicateUuid }
);
