use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::order::{OrderRes, ROrderCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;

#[post("/order")]
async fn place(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<ROrderCreate>,
) -> ApiResult<OrderRes> {
    let caller = authenticate(&db, auth.token()).await?;
    body.validate()?;

    let order = db.create_order(caller.id, body.into_inner()).await?;

    Ok(ApiResponse::Created(order.into()))
}
