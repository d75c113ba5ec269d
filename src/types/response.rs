use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    /// 204 carrying the removed row's id in the `Entity` header.
    Deleted(i32),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created()
                .json(v),
            ApiResponse::Deleted(id) => HttpResponse::NoContent()
                .insert_header(("Entity", id.to_string()))
                .finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
