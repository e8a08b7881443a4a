use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{TareaError, TareaResult},
    models::{CreateTarea, Tarea, UpdateTarea},
    repository::TareaRepository,
};

pub struct PgTareaRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTareaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TareaRepository for PgTareaRepository {
    async fn create(&self, input: CreateTarea) -> TareaResult<Tarea> {
        // The database assigns the id; created_at is set in the conversion
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| TareaError::Database(e.to_string()))?;

        tracing::info!(tarea_id = %model.id, "Created tarea");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> TareaResult<Option<Tarea>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| TareaError::Database(e.to_string()))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> TareaResult<Vec<Tarea>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .all(self.base.db())
            .await
            .map_err(|e| TareaError::Database(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i64, input: UpdateTarea) -> TareaResult<Tarea> {
        // Fetch existing tarea
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| TareaError::Database(e.to_string()))?
            .ok_or(TareaError::NotFound(id))?;

        // Apply the partial update on the domain model
        let mut tarea: Tarea = model.into();
        tarea.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(tarea.id),
            title: Set(tarea.title.clone()),
            content: Set(tarea.content.clone()),
            completed: Set(tarea.completed),
            created_at: Set(tarea.created_at.into()),
        };

        let updated_model = self
            .base
            .update(active_model)
            .await
            .map_err(|e| TareaError::Database(e.to_string()))?;

        tracing::info!(tarea_id = %id, "Updated tarea");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i64) -> TareaResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| TareaError::Database(e.to_string()))?;

        if rows_affected > 0 {
            tracing::info!(tarea_id = %id, "Deleted tarea");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
