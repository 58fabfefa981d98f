//! Create the `task` table.
//!
//! Body length is capped at 500 characters at the column level as well;
//! the archive flag defaults to false so new tasks land in the active list.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(big_integer(Task::Id).primary_key().auto_increment())
                    .col(string_len(Task::Body, 500).not_null())
                    .col(boolean(Task::Archive).not_null().default(false))
                    .col(timestamp_with_time_zone(Task::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Task::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Task::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Task { Table, Id, Body, Archive, CreatedAt, UpdatedAt }
