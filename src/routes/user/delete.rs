use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthenticatedUser;
use crate::utils::webutils::validate_owner;
use actix_web::{delete, web};
use actix_web_httpauth::middleware::HttpAuthentication;
use std::sync::Arc;

#[delete("/{id}", wrap = "HttpAuthentication::with_fn(validate_owner)")]
async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    owner: web::ReqData<AuthenticatedUser>,
) -> ApiResult<()> {
    let removed = db.delete_user(owner.0).await?;
    if removed == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::Deleted(owner.0))
}
