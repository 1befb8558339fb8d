use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSignup, UserRes};
use crate::utils::token::encrypt;

#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSignup>,
) -> ApiResult<UserRes> {
    let password_hash =
        encrypt(&body.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            username: body.username.clone(),
            email: body.email.clone(),
            password_hash,
            is_staff: body.is_staff,
        })
        .await?;

    let user = db.get_user_by_id(&user_id).await?;

    Ok(ApiResponse::Created(user.into()))
}
