//! Repositories for the descriptive vocabularies.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::repository_for;
use crate::infrastructure::database::entities as ent;
use crate::infrastructure::persistence::audit::AuditedEntity;
use crate::infrastructure::persistence::error::PersistenceError;
use crate::infrastructure::persistence::history;
use crate::infrastructure::persistence::unit_of_work::UnitOfWork;

repository_for!(CategoryRepository, category);

repository_for!(DetailRepository, detail);

repository_for!(ParameterRepository, parameter);

repository_for!(QuestionRepository, question);
