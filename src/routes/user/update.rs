use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthenticatedUser;
use crate::types::user::{RUserCreate, UserRes};
use crate::utils::webutils::validate_owner;
use actix_web::{put, web};
use actix_web_httpauth::middleware::HttpAuthentication;
use std::sync::Arc;

#[put("/{id}", wrap = "HttpAuthentication::with_fn(validate_owner)")]
async fn update(
    db: web::Data<Arc<DatabaseService>>,
    owner: web::ReqData<AuthenticatedUser>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let payload = body.into_inner().into_validated()?;
    let user = db.update_user(owner.0, payload).await?;

    Ok(ApiResponse::Ok(user.into()))
}
