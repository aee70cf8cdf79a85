//! Migration: Create the example table with audit and soft delete columns.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Example::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Example::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Example::Code).string_len(50).not_null())
                    .col(ColumnDef::new(Example::Example).text().not_null())
                    .col(
                        ColumnDef::new(Example::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Example::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Example::UpdatedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Example::UpdatedBy).string().null())
                    .col(ColumnDef::new(Example::DeletedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Example::DeletedBy).string().null())
                    .col(ColumnDef::new(Example::Uuid).uuid().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // Listings always filter on deleted_at
        manager
            .create_index(
                Index::create()
                    .name("idx_example_deleted_at")
                    .table(Example::Table)
                    .col(Example::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Example::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Example {
    Table,
    Id,
    Code,
    Example,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
    DeletedAt,
    DeletedBy,
    Uuid,
}
