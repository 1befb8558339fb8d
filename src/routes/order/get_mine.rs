use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::order::OrderRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;

#[get("/user/order/{id}")]
async fn get_mine(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<OrderRes> {
    let caller = authenticate(&db, auth.token()).await?;

    let order = db.get_order_for_owner(caller.id, path.into_inner()).await?;

    Ok(ApiResponse::Ok(order.into()))
}
