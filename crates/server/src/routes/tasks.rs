use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use service::task::TaskFilter;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct TaskInput {
    pub body: String,
}

#[utoipa::path(
    get, path = "/tasks", tag = "tasks",
    responses(
        (status = 200, description = "Active tasks, newest first"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn list_active(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::task::Model>>, JsonApiError> {
    let list = state.tasks.list(TaskFilter::Active).await?;
    info!(count = list.len(), "list active tasks");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/tasks/archived", tag = "tasks",
    responses(
        (status = 200, description = "Archived tasks, newest first"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn list_archived(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::task::Model>>, JsonApiError> {
    let list = state.tasks.list(TaskFilter::Archived).await?;
    info!(count = list.len(), "list archived tasks");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/tasks", tag = "tasks",
    request_body = crate::openapi::TaskInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<TaskInput>,
) -> Result<Json<models::task::Model>, JsonApiError> {
    let created = state.tasks.create(&input.body).await?;
    info!(id = created.id, "created task");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/tasks/{id}", tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = crate::openapi::TaskInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<TaskInput>,
) -> Result<StatusCode, JsonApiError> {
    state.tasks.update(id, &input.body).await?;
    info!(id, "updated task");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch, path = "/tasks/{id}/archive", tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Archive flag toggled"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn toggle_archive(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.tasks.toggle_archive(id).await?;
    info!(id, "toggled task archive flag");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/tasks/{id}", tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.tasks.delete(id).await?;
    info!(id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}
