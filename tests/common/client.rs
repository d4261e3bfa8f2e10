use actix_files::Files;
use actix_web::{web, App};
use entradas_api::db::service::DatabaseService;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(entradas_api::routes::configure_routes)
            .service(Files::new("/", "public").index_file("login.html"))
    }
}
