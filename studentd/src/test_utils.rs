//! Shared helpers for handler tests: an in-memory [`StudentStore`] and a
//! `TestServer` wired up exactly like the production router.

use crate::db::errors::Result;
use crate::db::handlers::{MAX_LIST_RESULTS, StudentFilter, StudentStore};
use crate::db::models::students::{StudentRecord, StudentUpdateDBRequest};
use crate::{AppState, Config, build_router};
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, RwLock};

/// Substitute storage backend holding records in insertion order. Mirrors
/// the server's observable semantics: assigned ObjectIds, the list cap, and
/// modified-count-based updates.
#[derive(Debug, Default)]
pub struct InMemoryStudents {
    records: RwLock<Vec<StudentRecord>>,
}

#[async_trait::async_trait]
impl StudentStore for InMemoryStudents {
    async fn insert(&self, record: &StudentRecord) -> Result<ObjectId> {
        let id = ObjectId::new();
        let mut stored = record.clone();
        stored.id = Some(id);
        self.records.write().unwrap().push(stored);
        Ok(id)
    }

    async fn list(&self, filter: &StudentFilter) -> Result<Vec<StudentRecord>> {
        let records = self.records.read().unwrap();
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .take(MAX_LIST_RESULTS as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: ObjectId) -> Result<Option<StudentRecord>> {
        let records = self.records.read().unwrap();
        Ok(records.iter().find(|record| record.id == Some(id)).cloned())
    }

    async fn update(&self, id: ObjectId, update: &StudentUpdateDBRequest) -> Result<u64> {
        let mut records = self.records.write().unwrap();
        match records.iter_mut().find(|record| record.id == Some(id)) {
            Some(record) => Ok(u64::from(update.apply_to(record))),
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|record| record.id != Some(id));
        Ok(records.len() < before)
    }
}

/// Build a `TestServer` over the in-memory store. The store is also returned
/// so tests can seed or inspect records directly.
pub fn create_test_app() -> (axum_test::TestServer, Arc<InMemoryStudents>) {
    let store = Arc::new(InMemoryStudents::default());
    let state = AppState {
        store: store.clone(),
        config: Config::default(),
    };
    let server = axum_test::TestServer::new(build_router(state)).expect("Failed to create test server");
    (server, store)
}
