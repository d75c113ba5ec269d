use actix_web::{dev::ServiceRequest, error::JsonPayloadError, web, HttpMessage, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::debug;

use crate::types::{error::AppError, token::AuthenticatedUser};
use crate::utils::token::TokenService;

/// The one place a `{id}` path segment becomes a user id.
pub fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    Some(raw)
        .filter(|r| !r.is_empty() && r.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|r| r.parse::<i32>().ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid user id: {raw}")))
}

/// Bearer gate for routes that mutate `/users/{id}`.
///
/// A missing or malformed header, a token that fails verification and a
/// token belonging to somebody else all answer with the same 401.
pub async fn validate_owner(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        debug!("no bearer credentials on {}", req.path());
        return Err((AppError::Unauthorized.into(), req));
    };

    let verified = match req.app_data::<web::Data<TokenService>>() {
        Some(tokens) => tokens.verify(credentials.token()),
        None => Err(AppError::Internal("token service not registered".into())),
    };
    let user_id = match verified {
        Ok(id) => id,
        Err(e) => return Err((e.into(), req)),
    };

    let target = match parse_user_id(req.match_info().get("id").unwrap_or_default()) {
        Ok(id) => id,
        Err(e) => return Err((e.into(), req)),
    };

    if user_id != target {
        debug!("user {user_id} tried to act on user {target}");
        return Err((AppError::Unauthorized.into(), req));
    }

    req.extensions_mut().insert(AuthenticatedUser(user_id));
    Ok(req)
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}
