pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user_table;
mod m20240101_000002_create_session_table;
mod m20240101_000003_create_field_table;
mod m20240101_000004_create_product_tables;
mod m20240101_000005_create_activity_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user_table::Migration),
            Box::new(m20240101_000002_create_session_table::Migration),
            Box::new(m20240101_000003_create_field_table::Migration),
            Box::new(m20240101_000004_create_product_tables::Migration),
            Box::new(m20240101_000005_create_activity_tables::Migration),
        ]
    }
}
