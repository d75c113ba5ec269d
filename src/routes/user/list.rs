use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<UserRes>> {
    let users = db.get_all_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}
