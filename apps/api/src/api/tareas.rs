use axum::Router;
use domain_tareas::{PgTareaRepository, TareaService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgTareaRepository::new(state.db.clone());
    let service = TareaService::new(repository);
    handlers::router(service)
}
