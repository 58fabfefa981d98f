use std::sync::Arc;

use tracing::instrument;

use models::task;

use crate::errors::ServiceError;
use crate::task::repository::TaskRepository;

/// Which archive state `list` should fetch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaskFilter {
    Active,
    Archived,
}

/// Application service encapsulating the task-list business rules.
/// Validates input before any persistence call; never caches rows
/// across requests.
pub struct TaskService<R: TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Full matching set, newest first. Read-only.
    pub async fn list(&self, filter: TaskFilter) -> Result<Vec<task::Model>, ServiceError> {
        self.repo.list(filter == TaskFilter::Archived).await
    }

    /// Validate then persist a new active task.
    #[instrument(skip(self, body), fields(chars = body.chars().count()))]
    pub async fn create(&self, body: &str) -> Result<task::Model, ServiceError> {
        task::validate_body(body)?;
        self.repo.insert(body).await
    }

    /// Replace the body of an existing task. Body validation runs before
    /// the lookup; both checks precede the write.
    pub async fn update(&self, id: i64, body: &str) -> Result<(), ServiceError> {
        task::validate_body(body)?;
        let Some(mut current) = self.repo.find_by_id(id).await? else {
            return Err(ServiceError::not_found("task"));
        };
        current.body = body.to_string();
        self.repo.save(current).await?;
        Ok(())
    }

    /// Flip the archive flag. Two consecutive calls restore the original state.
    pub async fn toggle_archive(&self, id: i64) -> Result<(), ServiceError> {
        let Some(mut current) = self.repo.find_by_id(id).await? else {
            return Err(ServiceError::not_found("task"));
        };
        current.archive = !current.archive;
        self.repo.save(current).await?;
        Ok(())
    }

    /// Hard delete. Irreversible.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("task"));
        }
        Ok(())
    }
}
