//! Database migrations

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_core_tables::Migration),
            Box::new(m20250601_000002_create_link_tables::Migration),
            Box::new(m20250601_000003_create_revisions::Migration),
        ]
    }
}

mod m20250601_000001_create_core_tables;
mod m20250601_000002_create_link_tables;
mod m20250601_000003_create_revisions;

/// Table skeleton shared by every audited entity: hybrid id/uuid identity,
/// lifecycle stamps, soft-delete flag and optimistic row version.
pub(crate) fn audited_table(name: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(name))
        .if_not_exists()
        .col(
            ColumnDef::new(Alias::new("id"))
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Alias::new("uuid"))
                .uuid()
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(Alias::new("created_at"))
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Alias::new("created_by")).string().not_null())
        .col(
            ColumnDef::new(Alias::new("updated_at"))
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Alias::new("updated_by")).string().not_null())
        .col(
            ColumnDef::new(Alias::new("deleted"))
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Alias::new("row_version"))
                .big_integer()
                .not_null()
                .default(1),
        )
        .to_owned()
}

/// Foreign key onto a parent's unique `uuid` column.
pub(crate) fn parent_fk(table: &str, column: &str, parent: &str) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(format!("fk_{}_{}", table, column))
        .from(Alias::new(table), Alias::new(column))
        .to(Alias::new(parent), Alias::new("uuid"))
        .on_delete(ForeignKeyAction::Restrict)
        .to_owned()
}
