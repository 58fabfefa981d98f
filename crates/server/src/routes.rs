use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::task::{SeaOrmTaskRepository, TaskService};

use crate::openapi::ApiDoc;

pub mod tasks;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub tasks: Arc<TaskService<SeaOrmTaskRepository>>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service healthy")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, task routes, API docs
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tasks", get(tasks::list_active).post(tasks::create))
        .route("/tasks/archived", get(tasks::list_archived))
        .route(
            "/tasks/:id",
            put(tasks::update).patch(tasks::update).delete(tasks::delete),
        )
        .route("/tasks/:id/archive", patch(tasks::toggle_archive))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
