use crate::types::error::AppError;
use actix_web::web;

pub mod entradas;
pub mod export;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Keep the {error} body shape for malformed JSON too.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _| AppError::Validation(err.to_string()).into());

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .service(entradas::adicionar_item)
            .service(entradas::listar_itens)
            .service(export::exportar_entradas)
            .service(health::health),
    );
}
