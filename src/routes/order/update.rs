use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::order::{OrderRes, ROrderUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;

// No ownership check: any authenticated user may update any order.
#[put("/order/update/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
    body: web::Json<ROrderUpdate>,
) -> ApiResult<OrderRes> {
    authenticate(&db, auth.token()).await?;
    body.validate()?;

    let order = db
        .update_order_fields(path.into_inner(), body.into_inner())
        .await?;

    Ok(ApiResponse::Ok(order.into()))
}
