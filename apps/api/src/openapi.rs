use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Tareas API",
        version = "0.1.0",
        description = "API for managing tareas (to-do items)"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/tareas", api = domain_tareas::ApiDoc)
    )
)]
pub struct ApiDoc;
