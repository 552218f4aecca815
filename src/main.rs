use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use portfolio::api::{configure_routes, AppState};
use portfolio::config::{AppConfig, API_KEY_VAR};
use portfolio::schedule::ScheduledTask;
use portfolio::banner;
use std::time::Duration;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = AppConfig::from_env().map_err(|e| {
        log::error!("Failed to load app configuration from environment: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    if app_config.gemini.api_key.resolve().is_none() {
        log::warn!(
            "❌ {} not set! The synergy check will report an error until it is.",
            API_KEY_VAR
        );
    }

    let host = app_config.server.host.clone();
    let port = app_config.server.port;
    let session_ttl = app_config.server.session_ttl;
    let state = AppState::new(app_config);

    let sweeper = {
        let sessions = state.sessions.clone();
        ScheduledTask::every(SWEEP_INTERVAL, move || {
            let sessions = sessions.clone();
            async move {
                sessions.sweep_idle(session_ttl).await;
            }
        })
    };

    log::info!("🚀 Starting server...");
    log::info!("📄 Portfolio available at http://{}:{}", host, port);

    let sessions = state.sessions.clone();
    let result = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await;

    sweeper.shutdown().await;
    sessions.close_all().await;
    result
}
