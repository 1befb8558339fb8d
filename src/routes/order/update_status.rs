use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::order::{OrderRes, ROrderStatus};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::require_staff;

// Status transitions are not ordered; staff may set any enumerated value.
#[patch("/order/update/{id}")]
async fn update_status(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
    body: web::Json<ROrderStatus>,
) -> ApiResult<OrderRes> {
    require_staff(&db, auth.token()).await?;

    let order = db
        .update_order_status(path.into_inner(), body.order_status)
        .await?;

    Ok(ApiResponse::Ok(order.into()))
}
