use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_user_table::User;
use crate::m20240101_000003_create_field_table::Field;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ActivityType {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Activity {
    Table,
    Id,
    FieldId,
    UserId,
    ActivityTypeId,
    Date,
    Time,
    Notes,
    Completed,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(ActivityType::Table)
                .col(
                    ColumnDef::new(ActivityType::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(ActivityType::Name)
                        .string()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(ActivityType::Description).text())
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Activity::Table)
                .col(
                    ColumnDef::new(Activity::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Activity::FieldId).uuid().not_null())
                .col(ColumnDef::new(Activity::UserId).uuid().not_null())
                .col(ColumnDef::new(Activity::ActivityTypeId).uuid().not_null())
                .col(ColumnDef::new(Activity::Date).date().not_null())
                .col(ColumnDef::new(Activity::Time).time())
                .col(ColumnDef::new(Activity::Notes).text())
                .col(
                    ColumnDef::new(Activity::Completed)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(
                    ColumnDef::new(Activity::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_activity_field")
                        .from(Activity::Table, Activity::FieldId)
                        .to(Field::Table, Field::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_activity_user")
                        .from(Activity::Table, Activity::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_activity_type")
                        .from(Activity::Table, Activity::ActivityTypeId)
                        .to(ActivityType::Table, ActivityType::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_activity_field")
                .table(Activity::Table)
                .col(Activity::FieldId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_activity_date")
                .table(Activity::Table)
                .col(Activity::Date)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Activity::Table).if_exists().to_owned())
            .await?;
        m.drop_table(
            Table::drop()
                .table(ActivityType::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
