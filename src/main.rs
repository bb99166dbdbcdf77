use actix_web::{web, App, HttpServer};
use farmtrack::config::EnvConfig;
use farmtrack::db::DbService;
use farmtrack::routes::configure_routes;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = DbService::new(&config.db_url)
        .await
        .expect("Failed to initialize database");

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
