use async_trait::async_trait;

use crate::error::TareaResult;
use crate::models::{CreateTarea, Tarea, UpdateTarea};

/// Repository trait for Tarea persistence
///
/// Defines the data access interface for tareas. Implementations can use
/// different storage backends (PostgreSQL, in-memory).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TareaRepository: Send + Sync {
    /// Create a new tarea; storage assigns id and created_at
    async fn create(&self, input: CreateTarea) -> TareaResult<Tarea>;

    /// Get a tarea by ID
    async fn get_by_id(&self, id: i64) -> TareaResult<Option<Tarea>>;

    /// List all tareas
    async fn list(&self) -> TareaResult<Vec<Tarea>>;

    /// Update an existing tarea, applying only the supplied fields
    async fn update(&self, id: i64, input: UpdateTarea) -> TareaResult<Tarea>;

    /// Delete a tarea by ID, reporting whether a row was removed
    async fn delete(&self, id: i64) -> TareaResult<bool>;
}
