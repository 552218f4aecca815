// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::scope("/sessions")
                    .route("", web::post().to(handlers::open_session))
                    .route("/{id}", web::delete().to(handlers::close_session))
                    .route("/{id}/synergy", web::get().to(handlers::get_synergy))
                    .route("/{id}/synergy", web::post().to(handlers::submit_synergy))
            )
    )
    .route("/", web::get().to(handlers::index))
    .route("/infosys.docx", web::get().to(handlers::download_resume))
    .route("/static/{path:.*}", web::get().to(handlers::static_asset));
}
