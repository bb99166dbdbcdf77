use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    EmptyOk,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Status payload for mutating endpoints: the transient user-visible
/// message plus the canonical listing page the client should land on.
#[derive(Serialize)]
pub struct StatusRes {
    pub message: String,
    pub redirect: String,
}

impl StatusRes {
    pub fn new(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        StatusRes {
            message: message.into(),
            redirect: redirect.into(),
        }
    }
}
