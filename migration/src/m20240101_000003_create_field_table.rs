use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub enum Field {
    Table,
    Id,
    Name,
    Location,
    Size,
    SizeUnit,
    Description,
    CenterLat,
    CenterLng,
    ZoomLevel,
    MapBounds,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Field::Table)
                .col(
                    ColumnDef::new(Field::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Field::Name).string().not_null())
                .col(ColumnDef::new(Field::Location).string())
                .col(ColumnDef::new(Field::Size).double())
                .col(
                    ColumnDef::new(Field::SizeUnit)
                        .string_len(10)
                        .not_null()
                        .default("hectare"),
                )
                .col(ColumnDef::new(Field::Description).text())
                .col(ColumnDef::new(Field::CenterLat).double())
                .col(ColumnDef::new(Field::CenterLng).double())
                .col(ColumnDef::new(Field::ZoomLevel).integer())
                .col(ColumnDef::new(Field::MapBounds).text())
                .col(ColumnDef::new(Field::UserId).uuid().not_null())
                .col(
                    ColumnDef::new(Field::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Field::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_field_user")
                        .from(Field::Table, Field::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_field_user")
                .table(Field::Table)
                .col(Field::UserId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Field::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
