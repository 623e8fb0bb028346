//! Secondary indexes for the `dinosaur` table.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dinosaur_name")
                    .table(Dinosaur::Table)
                    .col(Dinosaur::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_dinosaur_name").table(Dinosaur::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Dinosaur { Table, Name }
