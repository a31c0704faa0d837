//! Core entity tables: the location and equipment hierarchies, the
//! vocabularies, situations and communicates.

use sea_orm_migration::prelude::*;

use super::{audited_table, parent_fk};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut plants = audited_table("plants");
        plants
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(plants).await?;

        let mut areas = audited_table("areas");
        areas
            .col(ColumnDef::new(Alias::new("plant_uuid")).uuid().not_null())
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string())
            .foreign_key(&mut parent_fk("areas", "plant_uuid", "plants"));
        manager.create_table(areas).await?;

        let mut spaces = audited_table("spaces");
        spaces
            .col(ColumnDef::new(Alias::new("area_uuid")).uuid().not_null())
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string())
            .foreign_key(&mut parent_fk("spaces", "area_uuid", "areas"));
        manager.create_table(spaces).await?;

        let mut coordinates = audited_table("coordinates");
        coordinates
            .col(ColumnDef::new(Alias::new("space_uuid")).uuid().not_null())
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("pos_x")).integer())
            .col(ColumnDef::new(Alias::new("pos_y")).integer())
            .col(ColumnDef::new(Alias::new("note")).string())
            .foreign_key(&mut parent_fk("coordinates", "space_uuid", "spaces"));
        manager.create_table(coordinates).await?;

        let mut devices = audited_table("devices");
        devices
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(devices).await?;

        let mut models = audited_table("models");
        models
            .col(ColumnDef::new(Alias::new("device_uuid")).uuid().not_null())
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("spec_no")).string())
            .col(ColumnDef::new(Alias::new("note")).string())
            .foreign_key(&mut parent_fk("models", "device_uuid", "devices"));
        manager.create_table(models).await?;

        let mut assets = audited_table("assets");
        assets
            .col(ColumnDef::new(Alias::new("model_uuid")).uuid().not_null())
            .col(ColumnDef::new(Alias::new("coordinate_uuid")).uuid().not_null())
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("serial_no")).string())
            .col(ColumnDef::new(Alias::new("note")).string())
            .foreign_key(&mut parent_fk("assets", "model_uuid", "models"))
            .foreign_key(&mut parent_fk("assets", "coordinate_uuid", "coordinates"));
        manager.create_table(assets).await?;

        let mut categories = audited_table("categories");
        categories
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(categories).await?;

        let mut details = audited_table("details");
        details
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(details).await?;

        let mut parameters = audited_table("parameters");
        parameters
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("unit")).string())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(parameters).await?;

        let mut questions = audited_table("questions");
        questions
            .col(ColumnDef::new(Alias::new("text")).string().not_null())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(questions).await?;

        let mut situations = audited_table("situations");
        situations
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("kind")).string())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(situations).await?;

        let mut communicates = audited_table("communicates");
        communicates
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("scope")).string())
            .col(ColumnDef::new(Alias::new("kind")).string())
            .col(ColumnDef::new(Alias::new("starts_at")).timestamp_with_time_zone())
            .col(ColumnDef::new(Alias::new("ends_at")).timestamp_with_time_zone())
            .col(ColumnDef::new(Alias::new("note")).string());
        manager.create_table(communicates).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            "communicates",
            "situations",
            "questions",
            "parameters",
            "details",
            "categories",
            "assets",
            "models",
            "devices",
            "coordinates",
            "spaces",
            "areas",
            "plants",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}
