use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TareaError, TareaResult};
use crate::models::{CreateTarea, Tarea, UpdateTarea};
use crate::repository::TareaRepository;

/// Service layer for Tarea business logic
#[derive(Clone)]
pub struct TareaService<R: TareaRepository> {
    repository: Arc<R>,
}

impl<R: TareaRepository> TareaService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new tarea with validation
    #[instrument(skip(self, input), fields(tarea_title = %input.title))]
    pub async fn create_tarea(&self, input: CreateTarea) -> TareaResult<Tarea> {
        input
            .validate()
            .map_err(|e| TareaError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// List all tareas
    pub async fn list_tareas(&self) -> TareaResult<Vec<Tarea>> {
        self.repository.list().await
    }

    /// Get a tarea by ID
    #[instrument(skip(self), fields(tarea_id = %id))]
    pub async fn get_tarea(&self, id: i64) -> TareaResult<Tarea> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TareaError::NotFound(id))
    }

    /// Update a tarea, applying only the supplied fields
    #[instrument(skip(self, input), fields(tarea_id = %id))]
    pub async fn update_tarea(&self, id: i64, input: UpdateTarea) -> TareaResult<Tarea> {
        input
            .validate()
            .map_err(|e| TareaError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a tarea
    #[instrument(skip(self), fields(tarea_id = %id))]
    pub async fn delete_tarea(&self, id: i64) -> TareaResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TareaError::NotFound(id));
        }

        Ok(())
    }
}
