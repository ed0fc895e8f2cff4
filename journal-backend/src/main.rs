use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod models;
mod notes;

use config::Config;
use models::JournalConfig;
use notes::{Journal, JsonFile};

pub struct AppState {
    /// The single note store and its backing file
    pub journal: Arc<Journal>,
    /// Environment settings the server was started with
    pub config: Config,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Journal backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let settings = JournalConfig::load(&config.config_path);
    log::info!(
        "Settings: strict_persistence={}, week_window_days={}, max_body_bytes={}",
        settings.strict_persistence,
        settings.week_window_days,
        settings.max_body_bytes
    );

    // Load happens once, here; handlers only ever see this context
    let journal = Arc::new(Journal::open(
        Box::new(JsonFile::new(config.data_file.clone())),
        &settings,
    ));

    let host = config.host.clone();
    let port = config.port;
    log::info!("Journal running at http://{}:{}", host, port);
    log::info!("{} notes loaded", journal.len());

    let started_at = std::time::Instant::now();
    let serve_frontend = controllers::frontend::available(&config.static_dir);
    let max_body_bytes = settings.max_body_bytes;

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .app_data(web::Data::new(AppState {
                journal: Arc::clone(&journal),
                config: config.clone(),
                started_at,
            }))
            .app_data(controllers::json_config(max_body_bytes))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .configure(controllers::photos::config)
            .configure(controllers::calendar::config)
            .configure(controllers::trash::config);

        // Catch-all file service goes last so it never shadows /api
        if serve_frontend {
            app = app.service(controllers::frontend::service(&config.static_dir));
        }

        app
    })
    .bind((host.as_str(), port))?
    .run();

    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
