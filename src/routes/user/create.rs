use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserRes};
use actix_web::{post, web};
use std::sync::Arc;

#[post("/create")]
async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let payload = body.into_inner().into_validated()?;
    let user = db.create_user(payload).await?;

    Ok(ApiResponse::Created(user.into()))
}
