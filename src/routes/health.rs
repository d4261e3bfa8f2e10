use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

#[get("/health")]
async fn health(_req: actix_web::HttpRequest) -> ApiResult<()> {
    Ok(ApiResponse::EmptyOk)
}
