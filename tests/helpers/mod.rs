//! Shared fixtures for the persistence suite.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use fm_core::{Anonymous, Database, FixedClock, IntegrityRules, StaticIdentity, UnitOfWork};
use tempfile::TempDir;

pub struct TestBed {
    pub db: Arc<Database>,
    pub clock: Arc<FixedClock>,
    _dir: TempDir,
}

/// Base instant every suite starts from.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
}

pub async fn setup() -> TestBed {
    let dir = TempDir::new().expect("tempdir");
    let db = Database::create(&dir.path().join("fm.db"))
        .await
        .expect("create database");
    db.migrate().await.expect("migrate");

    TestBed {
        db: Arc::new(db),
        clock: Arc::new(FixedClock::new(t0())),
        _dir: dir,
    }
}

impl TestBed {
    pub fn uow(&self, actor: &str) -> UnitOfWork {
        UnitOfWork::new(
            self.db.clone(),
            Arc::new(StaticIdentity::new(actor)),
            self.clock.clone(),
        )
    }

    pub fn uow_anonymous(&self) -> UnitOfWork {
        UnitOfWork::new(self.db.clone(), Arc::new(Anonymous), self.clock.clone())
    }

    pub fn uow_with_rules(&self, actor: &str, rules: IntegrityRules) -> UnitOfWork {
        UnitOfWork::with_rules(
            self.db.clone(),
            Arc::new(StaticIdentity::new(actor)),
            self.clock.clone(),
            rules,
        )
    }
}
