#![cfg(test)]
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use models::task;

use crate::errors::ServiceError;
use crate::task::repository::TaskRepository;

/// In-memory stand-in for the SeaORM repository: same ordering and
/// timestamp behavior, backed by a mutex-guarded map. Ids are assigned
/// from a monotonically increasing counter and never reused.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, task::Model>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self, archived: bool) -> Result<Vec<task::Model>, ServiceError> {
        let inner = self.inner.lock().unwrap();
        // BTreeMap iterates ascending; reverse for id-descending order.
        Ok(inner
            .rows
            .values()
            .rev()
            .filter(|t| t.archive == archived)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<task::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn insert(&self, body: &str) -> Result<task::Model, ServiceError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let now = Utc::now().into();
        let row = task::Model {
            id: inner.next_id,
            body: body.to_string(),
            archive: false,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn save(&self, task: task::Model) -> Result<task::Model, ServiceError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.rows.contains_key(&task.id) {
            return Err(ServiceError::Db("row vanished before save".into()));
        }
        let mut row = task;
        row.updated_at = Utc::now().into();
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }
}
