//! Revisions table: append-only prior row images for audited entities.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("revisions"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("entity")).string().not_null())
                    .col(ColumnDef::new(Alias::new("entity_uuid")).uuid().not_null())
                    .col(ColumnDef::new(Alias::new("data")).json().not_null())
                    .col(
                        ColumnDef::new(Alias::new("valid_from"))
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("valid_to"))
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_revisions_entity")
                    .table(Alias::new("revisions"))
                    .col(Alias::new("entity"))
                    .col(Alias::new("entity_uuid"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("revisions")).if_exists().to_owned())
            .await
    }
}
