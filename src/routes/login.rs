use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::LoginRes;
use crate::types::user::RLogin;
use crate::utils::token::TokenService;

#[post("/login")]
async fn login(
    db: web::Data<Arc<DatabaseService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let creds = body.into_inner().into_validated()?;
    let user = db.authenticate(&creds.email, &creds.password).await?;
    let token = tokens.issue(user.id)?;

    Ok(ApiResponse::Ok(LoginRes { token }))
}
