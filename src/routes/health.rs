use actix_web::get;
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {}

#[get("/health")]
async fn health() -> ApiResult<Response> {
    Ok(ApiResponse::EmptyOk)
}
