use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, verify};
use entity::user::Model as UserModel;

/// Resolves a bearer token to its active user, or `Unauthorized`.
///
/// Every failure mode collapses to `Unauthorized` on purpose: a caller with a
/// bad token learns nothing about which part of the check failed.
pub async fn authenticate(db: &PostgresService, token: &str) -> Result<UserModel, AppError> {
    let (user_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;

    let user = db
        .get_user_by_id(&user_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    let token_hash = user.token_hash.as_deref().ok_or(AppError::Unauthorized)?;
    if !verify(&secret, token_hash).map_err(|_| AppError::Unauthorized)? {
        return Err(AppError::Unauthorized);
    }
    if !user.is_active {
        return Err(AppError::Unauthorized);
    }

    Ok(user)
}

/// `authenticate` plus the staff role check. Non-staff callers get
/// `Forbidden` regardless of whether the target resource exists.
pub async fn require_staff(db: &PostgresService, token: &str) -> Result<UserModel, AppError> {
    let user = authenticate(db, token).await?;
    if !user.is_staff {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}
