//! Persistence and consistency layer.
//!
//! Callers construct entity models, stage operations on per-aggregate
//! repositories, and commit them atomically through a [`unit_of_work::UnitOfWork`].
//! Commit resolves one lifecycle stamp, validates referential integrity,
//! captures temporal history and applies every staged write inside a single
//! transaction.

pub mod audit;
pub mod error;
pub mod history;
pub mod integrity;
pub mod repository;
pub mod unit_of_work;
