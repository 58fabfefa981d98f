use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::task::{self, Entity as TaskEntity};

use crate::errors::ServiceError;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks with the given archive state, highest id first.
    async fn list(&self, archived: bool) -> Result<Vec<task::Model>, ServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<task::Model>, ServiceError>;

    /// Insert a new active task; the store assigns id and timestamps.
    async fn insert(&self, body: &str) -> Result<task::Model, ServiceError>;

    /// Persist the mutable columns of an existing row; refreshes `updated_at`.
    async fn save(&self, task: task::Model) -> Result<task::Model, ServiceError>;

    /// Hard delete; returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTaskRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn list(&self, archived: bool) -> Result<Vec<task::Model>, ServiceError> {
        let rows = TaskEntity::find()
            .filter(task::Column::Archive.eq(archived))
            .order_by_desc(task::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<task::Model>, ServiceError> {
        let found = TaskEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn insert(&self, body: &str) -> Result<task::Model, ServiceError> {
        let now = Utc::now().into();
        let am = task::ActiveModel {
            body: Set(body.to_string()),
            archive: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, task: task::Model) -> Result<task::Model, ServiceError> {
        let am = task::ActiveModel {
            id: Unchanged(task.id),
            body: Set(task.body),
            archive: Set(task.archive),
            created_at: Unchanged(task.created_at),
            updated_at: Set(Utc::now().into()),
        };
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = TaskEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
