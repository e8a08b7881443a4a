//! Handler tests for the Tareas domain
//!
//! These tests verify that the HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! The router runs against the in-memory repository, so the suite exercises
//! the full handler → service → repository chain without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_tareas::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = TareaService::new(InMemoryTareaRepository::new());
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_tarea_returns_201_with_defaults() {
    let app = app();

    let request = post_json(
        "/",
        json!({
            "title": "Título de prueba",
            "content": "Contenido de prueba"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let tarea: Tarea = json_body(response.into_body()).await;
    assert_eq!(tarea.id, 1);
    assert_eq!(tarea.title, "Título de prueba");
    assert_eq!(tarea.content, "Contenido de prueba");
    assert!(!tarea.completed);
}

#[tokio::test]
async fn test_create_tarea_without_content_defaults_to_empty() {
    let app = app();

    let request = post_json("/", json!({ "title": "Solo título" }));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let tarea: Tarea = json_body(response.into_body()).await;
    assert_eq!(tarea.content, "");
}

#[tokio::test]
async fn test_create_tarea_rejects_empty_title() {
    let app = app();

    let request = post_json("/", json!({ "title": "" }));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_tareas_returns_created_tarea() {
    let service = TareaService::new(InMemoryTareaRepository::new());
    let created = service
        .create_tarea(CreateTarea {
            title: "Título de prueba".to_string(),
            content: "Contenido de prueba".to_string(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let tareas: Vec<Tarea> = json_body(response.into_body()).await;
    assert_eq!(tareas, vec![created]);
}

#[tokio::test]
async fn test_get_tarea_returns_200() {
    let service = TareaService::new(InMemoryTareaRepository::new());
    let created = service
        .create_tarea(CreateTarea {
            title: "Título de prueba".to_string(),
            content: String::new(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let tarea: Tarea = json_body(response.into_body()).await;
    assert_eq!(tarea, created);
}

#[tokio::test]
async fn test_get_tarea_returns_404_for_missing() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_tarea_returns_400_for_non_numeric_id() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/abc")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_tarea_replaces_only_supplied_fields() {
    let service = TareaService::new(InMemoryTareaRepository::new());
    let created = service
        .create_tarea(CreateTarea {
            title: "Título de prueba".to_string(),
            content: "Contenido de prueba".to_string(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = put_json(
        &format!("/{}", created.id),
        json!({ "title": "Título actualizado" }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let tarea: Tarea = json_body(response.into_body()).await;
    assert_eq!(tarea.title, "Título actualizado");
    assert_eq!(tarea.content, created.content);
    assert_eq!(tarea.completed, created.completed);
    assert_eq!(tarea.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_tarea_returns_404_for_missing() {
    let app = app();

    let request = put_json("/999", json!({}));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_tarea_returns_204_with_empty_body() {
    let service = TareaService::new(InMemoryTareaRepository::new());
    let created = service
        .create_tarea(CreateTarea {
            title: "Para borrar".to_string(),
            content: String::new(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_tarea_returns_404_for_missing() {
    let app = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_terminal() {
    let service = TareaService::new(InMemoryTareaRepository::new());
    let created = service
        .create_tarea(CreateTarea {
            title: "Efímera".to_string(),
            content: String::new(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let get = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(get).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
