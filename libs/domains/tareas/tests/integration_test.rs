//! Service-level integration tests for the Tareas domain.
//!
//! Exercises the service against the in-memory repository, covering the
//! contract end to end: creation defaults, lookup idempotence, partial
//! updates, round-trips, and terminal deletion.

use domain_tareas::{CreateTarea, InMemoryTareaRepository, TareaError, TareaService, UpdateTarea};

fn service() -> TareaService<InMemoryTareaRepository> {
    TareaService::new(InMemoryTareaRepository::new())
}

fn create_input(title: &str, content: &str) -> CreateTarea {
    CreateTarea {
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_defaults() {
    let service = service();

    let tarea = service
        .create_tarea(create_input("Título de prueba", "Contenido de prueba"))
        .await
        .unwrap();

    assert_eq!(tarea.id, 1);
    assert!(!tarea.completed);
    assert_eq!(tarea.title, "Título de prueba");
    assert_eq!(tarea.content, "Contenido de prueba");
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let service = service();

    let created = service
        .create_tarea(create_input("Título de prueba", "Contenido de prueba"))
        .await
        .unwrap();

    let fetched = service.get_tarea(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_is_idempotent_without_mutation() {
    let service = service();

    let created = service
        .create_tarea(create_input("estable", ""))
        .await
        .unwrap();

    let first = service.get_tarea(created.id).await.unwrap();
    let second = service.get_tarea(created.id).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_contains_exactly_the_stored_tareas() {
    let service = service();

    let created = service
        .create_tarea(create_input("única", ""))
        .await
        .unwrap();

    let tareas = service.list_tareas().await.unwrap();

    assert_eq!(tareas, vec![created]);
}

#[tokio::test]
async fn test_update_is_partial() {
    let service = service();

    let created = service
        .create_tarea(create_input("Título de prueba", "Contenido de prueba"))
        .await
        .unwrap();

    let updated = service
        .update_tarea(
            created.id,
            UpdateTarea {
                title: Some("Título actualizado".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Título actualizado");
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.completed, created.completed);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_persists_the_change() {
    let service = service();

    let created = service
        .create_tarea(create_input("antes", ""))
        .await
        .unwrap();

    service
        .update_tarea(
            created.id,
            UpdateTarea {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let fetched = service.get_tarea(created.id).await.unwrap();
    assert!(fetched.completed);
}

#[tokio::test]
async fn test_remove_is_terminal() {
    let service = service();

    let created = service
        .create_tarea(create_input("pasajera", ""))
        .await
        .unwrap();

    service.delete_tarea(created.id).await.unwrap();

    let result = service.get_tarea(created.id).await;
    assert!(matches!(result, Err(TareaError::NotFound(_))));
}

#[tokio::test]
async fn test_operations_on_missing_id_fail_with_not_found() {
    let service = service();

    assert!(matches!(
        service.get_tarea(999).await,
        Err(TareaError::NotFound(999))
    ));
    assert!(matches!(
        service.update_tarea(999, UpdateTarea::default()).await,
        Err(TareaError::NotFound(999))
    ));
    assert!(matches!(
        service.delete_tarea(999).await,
        Err(TareaError::NotFound(999))
    ));
}
