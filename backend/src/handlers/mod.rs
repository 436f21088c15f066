use actix_web::web;

pub mod members;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(members::configure));
}
