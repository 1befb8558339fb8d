use actix_web::web;

pub mod auth;
pub mod health;
pub mod order;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/auth")
            .service(auth::signup::signup)
            .service(auth::login::login),
    );
    cfg.service(order::place::place)
        .service(order::list_all::list_all)
        .service(order::get_by_id::get_by_id)
        .service(order::list_mine::list_mine)
        .service(order::get_mine::get_mine)
        .service(order::update::update)
        .service(order::update_status::update_status)
        .service(order::delete::delete);
}
