use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct TaskDoc {
    pub id: i64,
    pub body: String,
    pub archive: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct TaskInputDoc {
    pub body: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::tasks::list_active,
        crate::routes::tasks::list_archived,
        crate::routes::tasks::create,
        crate::routes::tasks::update,
        crate::routes::tasks::toggle_archive,
        crate::routes::tasks::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TaskDoc,
            TaskInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "tasks")
    )
)]
pub struct ApiDoc;
