use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;

// No ownership or staff check: any authenticated user may delete any order.
// Deleting an already-deleted id is NotFound.
#[delete("/order/delete/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    authenticate(&db, auth.token()).await?;

    db.delete_order(path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}
