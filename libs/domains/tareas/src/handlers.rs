use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{TareaError, TareaResult};
use crate::models::{CreateTarea, Tarea, UpdateTarea};
use crate::repository::TareaRepository;
use crate::service::TareaService;

/// OpenAPI documentation for the Tareas API
#[derive(OpenApi)]
#[openapi(
    paths(list_tareas, get_tarea, create_tarea, update_tarea, delete_tarea),
    components(schemas(Tarea, CreateTarea, UpdateTarea)),
    tags(
        (name = "tareas", description = "Tarea CRUD operations")
    )
)]
pub struct ApiDoc;

fn parse_id(id: &str) -> TareaResult<i64> {
    id.parse()
        .map_err(|_| TareaError::Validation("Invalid tarea ID".to_string()))
}

/// List all tareas
#[utoipa::path(
    get,
    path = "",
    tag = "tareas",
    responses(
        (status = 200, description = "List of tareas", body = Vec<Tarea>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_tareas<R: TareaRepository>(
    State(service): State<Arc<TareaService<R>>>,
) -> TareaResult<Json<Vec<Tarea>>> {
    let tareas = service.list_tareas().await?;
    Ok(Json(tareas))
}

/// Get a tarea by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tareas",
    params(
        ("id" = String, Path, description = "Tarea ID")
    ),
    responses(
        (status = 200, description = "Tarea found", body = Tarea),
        (status = 400, description = "Invalid tarea ID"),
        (status = 404, description = "Tarea not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_tarea<R: TareaRepository>(
    State(service): State<Arc<TareaService<R>>>,
    Path(id): Path<String>,
) -> TareaResult<impl IntoResponse> {
    let tarea_id = parse_id(&id)?;

    let tarea = service.get_tarea(tarea_id).await?;
    Ok(Json(tarea))
}

/// Create a new tarea
#[utoipa::path(
    post,
    path = "",
    tag = "tareas",
    request_body = CreateTarea,
    responses(
        (status = 201, description = "Tarea created successfully", body = Tarea),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_tarea<R: TareaRepository>(
    State(service): State<Arc<TareaService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTarea>,
) -> TareaResult<impl IntoResponse> {
    let tarea = service.create_tarea(input).await?;
    Ok((StatusCode::CREATED, Json(tarea)))
}

/// Update a tarea
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tareas",
    params(
        ("id" = String, Path, description = "Tarea ID")
    ),
    request_body = UpdateTarea,
    responses(
        (status = 200, description = "Tarea updated successfully", body = Tarea),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Tarea not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_tarea<R: TareaRepository>(
    State(service): State<Arc<TareaService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTarea>,
) -> TareaResult<impl IntoResponse> {
    let tarea_id = parse_id(&id)?;

    let tarea = service.update_tarea(tarea_id, input).await?;
    Ok(Json(tarea))
}

/// Delete a tarea
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tareas",
    params(
        ("id" = String, Path, description = "Tarea ID")
    ),
    responses(
        (status = 204, description = "Tarea deleted successfully"),
        (status = 400, description = "Invalid tarea ID"),
        (status = 404, description = "Tarea not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_tarea<R: TareaRepository>(
    State(service): State<Arc<TareaService<R>>>,
    Path(id): Path<String>,
) -> TareaResult<impl IntoResponse> {
    let tarea_id = parse_id(&id)?;

    service.delete_tarea(tarea_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the router for the tareas resource
pub fn router<R: TareaRepository + 'static>(service: TareaService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tareas).post(create_tarea))
        .route(
            "/{id}",
            get(get_tarea).put(update_tarea).delete(delete_tarea),
        )
        .with_state(shared_service)
}
