//! Many-to-many link tables for the situation and communicate graphs plus
//! the asset/model metadata edges. Every link table is fully audited and
//! enforces one edge per (left, right) pair.

use sea_orm_migration::prelude::*;

use super::{audited_table, parent_fk};

#[derive(DeriveMigrationName)]
pub struct Migration;

const LINK_TABLES: &[(&str, (&str, &str), (&str, &str), bool)] = &[
    (
        "asset_categories",
        ("asset_uuid", "assets"),
        ("category_uuid", "categories"),
        false,
    ),
    (
        "asset_details",
        ("asset_uuid", "assets"),
        ("detail_uuid", "details"),
        true,
    ),
    (
        "model_parameters",
        ("model_uuid", "models"),
        ("parameter_uuid", "parameters"),
        true,
    ),
    (
        "situation_questions",
        ("situation_uuid", "situations"),
        ("question_uuid", "questions"),
        false,
    ),
    (
        "situation_details",
        ("situation_uuid", "situations"),
        ("detail_uuid", "details"),
        false,
    ),
    (
        "situation_parameters",
        ("situation_uuid", "situations"),
        ("parameter_uuid", "parameters"),
        true,
    ),
    (
        "situation_categories",
        ("situation_uuid", "situations"),
        ("category_uuid", "categories"),
        false,
    ),
    (
        "situation_devices",
        ("situation_uuid", "situations"),
        ("device_uuid", "devices"),
        false,
    ),
    (
        "situation_assets",
        ("situation_uuid", "situations"),
        ("asset_uuid", "assets"),
        false,
    ),
    (
        "communicate_areas",
        ("communicate_uuid", "communicates"),
        ("area_uuid", "areas"),
        false,
    ),
    (
        "communicate_spaces",
        ("communicate_uuid", "communicates"),
        ("space_uuid", "spaces"),
        false,
    ),
    (
        "communicate_coordinates",
        ("communicate_uuid", "communicates"),
        ("coordinate_uuid", "coordinates"),
        false,
    ),
    (
        "communicate_devices",
        ("communicate_uuid", "communicates"),
        ("device_uuid", "devices"),
        false,
    ),
    (
        "communicate_models",
        ("communicate_uuid", "communicates"),
        ("model_uuid", "models"),
        false,
    ),
    (
        "communicate_assets",
        ("communicate_uuid", "communicates"),
        ("asset_uuid", "assets"),
        false,
    ),
    (
        "communicate_categories",
        ("communicate_uuid", "communicates"),
        ("category_uuid", "categories"),
        false,
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, left, right, with_value) in LINK_TABLES.iter().copied() {
            create_link_table(manager, name, left, right, with_value).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _, _, _) in LINK_TABLES.iter().rev().copied() {
            manager
                .drop_table(Table::drop().table(Alias::new(name)).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

async fn create_link_table(
    manager: &SchemaManager<'_>,
    name: &str,
    (left_col, left_parent): (&str, &str),
    (right_col, right_parent): (&str, &str),
    with_value: bool,
) -> Result<(), DbErr> {
    let mut table = audited_table(name);
    table
        .col(ColumnDef::new(Alias::new(left_col)).uuid().not_null())
        .col(ColumnDef::new(Alias::new(right_col)).uuid().not_null());
    if with_value {
        table.col(ColumnDef::new(Alias::new("value")).string().not_null());
    }
    table
        .foreign_key(&mut parent_fk(name, left_col, left_parent))
        .foreign_key(&mut parent_fk(name, right_col, right_parent));
    manager.create_table(table).await?;

    // one edge per pair
    manager
        .create_index(
            Index::create()
                .name(format!("idx_{}_edge", name))
                .table(Alias::new(name))
                .col(Alias::new(left_col))
                .col(Alias::new(right_col))
                .unique()
                .to_owned(),
        )
        .await?;

    Ok(())
}
