//! Repositories for situations and their graph edges.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::repository_for;
use crate::infrastructure::database::entities as ent;
use crate::infrastructure::persistence::audit::AuditedEntity;
use crate::infrastructure::persistence::error::PersistenceError;
use crate::infrastructure::persistence::history;
use crate::infrastructure::persistence::unit_of_work::UnitOfWork;

repository_for!(SituationRepository, situation);

repository_for!(
    SituationQuestionRepository,
    situation_question,
    finders: { list_by_situation by SituationUuid }
);

repository_for!(
    SituationDetailRepository,
    situation_detail,
    finders: { list_by_situation by SituationUuid }
);

repository_for!(
    SituationParameterRepository,
    situation_parameter,
    finders: { list_by_situation by SituationUuid }
);

repository_for!(
    SituationCategoryRepository,
    situation_category,
    finders: { list_by_situation by SituationUuid }
);

repository_for!(
    SituationDeviceRepository,
    situation_device,
    finders: { list_by_situation by SituationUuid }
);

repository_for!(
    SituationAssetRepository,
    situation_asset,
    finders: { list_by_situation by SituationUuid }
);
