use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::token::{construct_token, encrypt, new_token, verify};

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    // Unknown user, wrong password and inactive account all look the same.
    let user = db
        .find_user_by_username(&body.username)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    if !verify(&body.password, &user.password_hash).map_err(|_| AppError::Unauthorized)? {
        return Err(AppError::Unauthorized);
    }
    if !user.is_active {
        return Err(AppError::Unauthorized);
    }

    let secret = new_token();
    let hash = encrypt(&secret).map_err(|e| AppError::Internal(e.to_string()))?;
    db.store_token_hash(&user.id, hash).await?;

    Ok(ApiResponse::Ok(LoginRes {
        token: construct_token(&user.id.to_string(), &secret),
    }))
}
