//! Repositories for the equipment hierarchy and its metadata edges.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::repository_for;
use crate::infrastructure::database::entities as ent;
use crate::infrastructure::persistence::audit::AuditedEntity;
use crate::infrastructure::persistence::error::PersistenceError;
use crate::infrastructure::persistence::history;
use crate::infrastructure::persistence::unit_of_work::UnitOfWork;

repository_for!(DeviceRepository, device);

repository_for!(
    ModelRepository,
    model,
    finders: { list_by_device by DeviceUuid }
);

repository_for!(
    /// Assets, addressable by their model or their placement coordinate.
    AssetRepository,
    asset,
    finders: { list_by_model by ModelUuid, list_by_coordinate by CoordinateUuid }
);

repository_for!(
    AssetCategoryRepository,
    asset_category,
    finders: { list_by_asset by AssetUuid }
);

repository_for!(
    AssetDetailRepository,
    asset_detail,
    finders: { list_by_asset by AssetUuid }
);

repository_for!(
    ModelParameterRepository,
    model_parameter,
    finders: { list_by_model by ModelUuid }
);
