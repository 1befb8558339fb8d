use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::order::OrderRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::require_staff;

// Staff-only even for the order's owner; owners go through /user/order/{id}.
#[get("/orders/{id}")]
async fn get_by_id(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<OrderRes> {
    require_staff(&db, auth.token()).await?;

    let order = db.get_order(path.into_inner()).await?;

    Ok(ApiResponse::Ok(order.into()))
}
