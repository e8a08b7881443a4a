//! In-memory repository backend.
//!
//! Keeps tareas in a plain map guarded by a `RwLock`, with ids handed out by
//! an atomic counter. The test suites run against this backend instead of a
//! database; it also works for local experimentation without Postgres.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::{TareaError, TareaResult};
use crate::models::{CreateTarea, Tarea, UpdateTarea};
use crate::repository::TareaRepository;

#[derive(Default)]
pub struct InMemoryTareaRepository {
    tareas: RwLock<BTreeMap<i64, Tarea>>,
    next_id: AtomicI64,
}

impl InMemoryTareaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TareaRepository for InMemoryTareaRepository {
    async fn create(&self, input: CreateTarea) -> TareaResult<Tarea> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let tarea = Tarea {
            id,
            title: input.title,
            content: input.content,
            completed: false,
            created_at: chrono::Utc::now(),
        };

        let mut tareas = self
            .tareas
            .write()
            .map_err(|e| TareaError::Internal(e.to_string()))?;
        tareas.insert(id, tarea.clone());

        Ok(tarea)
    }

    async fn get_by_id(&self, id: i64) -> TareaResult<Option<Tarea>> {
        let tareas = self
            .tareas
            .read()
            .map_err(|e| TareaError::Internal(e.to_string()))?;

        Ok(tareas.get(&id).cloned())
    }

    async fn list(&self) -> TareaResult<Vec<Tarea>> {
        let tareas = self
            .tareas
            .read()
            .map_err(|e| TareaError::Internal(e.to_string()))?;

        Ok(tareas.values().cloned().collect())
    }

    async fn update(&self, id: i64, input: UpdateTarea) -> TareaResult<Tarea> {
        let mut tareas = self
            .tareas
            .write()
            .map_err(|e| TareaError::Internal(e.to_string()))?;

        let tarea = tareas.get_mut(&id).ok_or(TareaError::NotFound(id))?;
        tarea.apply_update(input);

        Ok(tarea.clone())
    }

    async fn delete(&self, id: i64) -> TareaResult<bool> {
        let mut tareas = self
            .tareas
            .write()
            .map_err(|e| TareaError::Internal(e.to_string()))?;

        Ok(tareas.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(title: &str) -> CreateTarea {
        CreateTarea {
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = InMemoryTareaRepository::new();

        let first = repo.create(create_input("primera")).await.unwrap();
        let second = repo.create(create_input("segunda")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let repo = InMemoryTareaRepository::new();

        let created = repo.create(create_input("una")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = InMemoryTareaRepository::new();

        let result = repo.update(999, UpdateTarea::default()).await;

        assert!(matches!(result, Err(TareaError::NotFound(999))));
    }
}
