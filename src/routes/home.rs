use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
async fn home() -> ApiResult<&'static str> {
    Ok(ApiResponse::Ok("Welcome To This Awesome API"))
}
