use actix_files::Files;
use actix_web::{web, App, HttpServer};
use entradas_api::config::EnvConfig;
use entradas_api::db::service::DatabaseService;
use entradas_api::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DatabaseService::new(&config.database_url)
            .await
            .expect("Failed to initialize database"),
    );

    log::info!("Starting server on {}", addr);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
            // Mounted last so /api always wins over file lookup.
            .service(Files::new("/", &static_dir).index_file("login.html"))
    })
    .bind(addr)?
    .run()
    .await
}
