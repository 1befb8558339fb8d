use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::order::OrderRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;

#[get("/user/orders")]
async fn list_mine(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<OrderRes>> {
    let caller = authenticate(&db, auth.token()).await?;

    let orders = db.list_orders_by_owner(caller.id).await?;

    Ok(ApiResponse::Ok(
        orders.into_iter().map(OrderRes::from).collect(),
    ))
}
