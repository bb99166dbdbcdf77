use farmtrack::db::DbService;

pub mod client;

pub struct TestContext {
    pub db: DbService,
}

impl TestContext {
    /// Each test gets its own in-memory database, migrated and with the
    /// activity-type catalog seeded, so tests can run in parallel.
    pub async fn new() -> TestContext {
        let db = DbService::new("sqlite::memory:")
            .await
            .expect("Failed to initialize test database");
        TestContext { db }
    }
}
