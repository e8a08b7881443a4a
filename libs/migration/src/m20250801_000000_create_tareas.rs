use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tareas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tareas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Tareas::Title))
                    .col(text(Tareas::Content).default(""))
                    .col(boolean(Tareas::Completed).default(false))
                    .col(
                        timestamp_with_time_zone(Tareas::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tareas_created_at")
                    .table(Tareas::Table)
                    .col(Tareas::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tareas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tareas {
    Table,
    Id,
    Title,
    Content,
    Completed,
    CreatedAt,
}
