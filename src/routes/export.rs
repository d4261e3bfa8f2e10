use crate::db::service::DatabaseService;
use crate::types::entrada::EntradaJson;
use crate::types::error::AppError;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// All entries as a CSV attachment, newest first, same field rendering as
/// the JSON listing.
#[get("/exportar-entradas")]
async fn exportar_entradas(
    db: web::Data<Arc<DatabaseService>>,
) -> Result<HttpResponse, AppError> {
    let rows = db.list_entradas().await?;
    if rows.is_empty() {
        return Err(AppError::NotFound);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(EntradaJson::from(row))
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(
                "relatorio_entradas.csv".to_string(),
            )],
        })
        .body(bytes))
}
