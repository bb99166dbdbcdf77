use sea_orm_migration::prelude::*;

use crate::m20240101_000003_create_field_table::Field;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    GrowingPeriod,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FieldProduct {
    Table,
    Id,
    FieldId,
    ProductId,
    PlantingDate,
    ExpectedHarvestDate,
    Status,
    Notes,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Product::Table)
                .col(
                    ColumnDef::new(Product::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(Product::Name)
                        .string()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(Product::Description).text())
                .col(ColumnDef::new(Product::GrowingPeriod).integer())
                .col(
                    ColumnDef::new(Product::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(FieldProduct::Table)
                .col(
                    ColumnDef::new(FieldProduct::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(FieldProduct::FieldId).uuid().not_null())
                .col(ColumnDef::new(FieldProduct::ProductId).uuid().not_null())
                .col(ColumnDef::new(FieldProduct::PlantingDate).date())
                .col(ColumnDef::new(FieldProduct::ExpectedHarvestDate).date())
                .col(
                    ColumnDef::new(FieldProduct::Status)
                        .string_len(20)
                        .not_null()
                        .default("active"),
                )
                .col(ColumnDef::new(FieldProduct::Notes).text())
                .col(
                    ColumnDef::new(FieldProduct::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_field_product_field")
                        .from(FieldProduct::Table, FieldProduct::FieldId)
                        .to(Field::Table, Field::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_field_product_product")
                        .from(FieldProduct::Table, FieldProduct::ProductId)
                        .to(Product::Table, Product::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_field_product_field")
                .table(FieldProduct::Table)
                .col(FieldProduct::FieldId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(FieldProduct::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(Table::drop().table(Product::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
