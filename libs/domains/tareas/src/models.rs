use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Tarea entity - represents a to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tarea {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,
    /// Tarea title
    pub title: String,
    /// Tarea body text
    pub content: String,
    /// Whether the tarea is completed
    pub completed: bool,
    /// Creation timestamp, immutable after creation
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new tarea
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTarea {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// DTO for updating an existing tarea.
///
/// All fields are optional; only supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTarea {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub completed: Option<bool>,
}

impl Tarea {
    /// Apply updates from an UpdateTarea DTO.
    ///
    /// Partial replacement: fields absent from the DTO keep their current
    /// value. `id` and `created_at` are never touched.
    pub fn apply_update(&mut self, update: UpdateTarea) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}
