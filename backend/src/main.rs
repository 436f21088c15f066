use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

mod config;
mod handlers;
mod models;
mod services;
mod store;

use config::Config;
use store::{MemoryStore, RecordStore, RestStore};

async fn index(state: web::Data<models::AppState>) -> actix_web::Result<NamedFile> {
    let static_path = state
        .config
        .static_files_path
        .as_deref()
        .unwrap_or("./static");
    Ok(NamedFile::open(format!("{}/index.html", static_path))?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    log::info!("Starting server at {}:{}", config.host, config.port);
    log::info!(
        "Record store at {} (namespace '{}')",
        config.store_url,
        config.store_namespace
    );

    if let Some(ref path) = config.static_files_path {
        log::info!("Serving static files from: {}", path);
    }

    // One store handle per process, shared by every handler
    let store: Arc<dyn RecordStore> = if config.store_url == "memory" {
        log::warn!("STORE_URL=memory: records are held in-process and lost on shutdown");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(RestStore::new(
            config.store_url.clone(),
            config.store_namespace.clone(),
            config.store_auth_token.clone(),
        ))
    };

    // Create app state
    let app_state = web::Data::new(models::AppState {
        store,
        config: config.clone(),
    });

    let static_files_path = config.static_files_path.clone();
    let cors_origins = config.cors_origins.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let allowed_origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origin_str = origin.to_str().unwrap_or("");
                allowed_origins
                    .iter()
                    .any(|allowed| origin_str.starts_with(allowed))
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Content-Type"])
            .max_age(3600);

        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure_routes);

        // Serve the built frontend if a path is configured
        if let Some(ref path) = static_files_path {
            app = app
                .service(Files::new("/pkg", format!("{}/pkg", path)))
                .service(Files::new("/assets", format!("{}/assets", path)))
                .default_service(web::route().to(index));
        }

        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
