use axum::Router;

pub mod health;
pub mod tareas;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and initializes all services. Returns a
/// stateless Router (sub-routers have their state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/tareas", tareas::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks.
///
/// Has state applied, so it can be merged with the stateless app router from
/// `create_router`. The /ready endpoint pings the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
