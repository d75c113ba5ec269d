use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use crate::utils::webutils::parse_user_id;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{id}")]
async fn get(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<UserRes> {
    let id = parse_user_id(&path)?;
    let user = db.get_user_by_id(id).await?;

    Ok(ApiResponse::Ok(user.into()))
}
