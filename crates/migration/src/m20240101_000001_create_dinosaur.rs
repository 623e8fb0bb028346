//! Create `dinosaur` table.
//!
//! The identifier is a database-assigned big serial; sequences are never
//! rewound, so ids are not reused after deletion.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dinosaur::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dinosaur::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Dinosaur::Name, 128).not_null())
                    .col(string_len_null(Dinosaur::Species, 128))
                    .col(string_len_null(Dinosaur::Era, 64))
                    .col(timestamp_with_time_zone(Dinosaur::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Dinosaur::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dinosaur::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dinosaur { Table, Id, Name, Species, Era, CreatedAt, UpdatedAt }
