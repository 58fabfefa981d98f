use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Task: index on archive (both list queries filter on it)
        manager
            .create_index(
                Index::create()
                    .name("idx_task_archive")
                    .table(Task::Table)
                    .col(Task::Archive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_task_archive").table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Task { Table, Archive }
