use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the tareas table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tareas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Tarea
impl From<Model> for crate::models::Tarea {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            completed: model.completed,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain CreateTarea to Sea-ORM ActiveModel.
// The id stays NotSet so the database assigns it on insert.
impl From<crate::models::CreateTarea> for ActiveModel {
    fn from(input: crate::models::CreateTarea) -> Self {
        ActiveModel {
            title: Set(input.title),
            content: Set(input.content),
            completed: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
    }
}
