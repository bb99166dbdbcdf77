use std::time::Duration;

use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::types::error::AppError;

#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str) -> Result<Self, AppError> {
        info!("Connecting to database...");
        let mut opt = ConnectOptions::new(uri.to_owned());
        opt.connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);
        if uri.contains(":memory:") {
            // a pooled in-memory sqlite db must stay on one connection
            opt.max_connections(1).min_connections(1);
        }
        let db = Database::connect(opt).await?;

        info!("Running migrations...");
        Migrator::up(&db, None).await?;

        let service = Self { db };
        service.seed_activity_types().await?;
        info!("Database ready.");
        Ok(service)
    }
}
