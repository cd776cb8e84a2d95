use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use job_match::config::{Settings, StoreBackend};
use job_match::routes::{self, AppState};
use job_match::services::{seed_store, MemoryStore, PostgresStore, RecordStore};
use job_match::telemetry::init_tracing;
use std::sync::Arc;
use tracing::{error, info};

fn io_error(msg: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, msg)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the subscriber can use it
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io_error(format!("Configuration error: {}", e))
    })?;

    init_tracing(&settings.logging);

    info!("Starting job matching service...");

    let store: Arc<dyn RecordStore> = match settings.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory record store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => {
            let postgres = PostgresStore::from_settings(&settings.database)
                .await
                .map_err(|e| {
                    error!("Failed to connect to PostgreSQL: {}", e);
                    io_error(format!("PostgreSQL connection error: {}", e))
                })?;
            info!(
                "PostgreSQL store initialized (max: {} connections)",
                settings.database.max_connections
            );
            Arc::new(postgres)
        }
    };

    if settings.store.seed_on_startup {
        seed_store(store.as_ref()).await.map_err(|e| {
            error!("Failed to seed record store: {}", e);
            io_error(format!("Seed error: {}", e))
        })?;
    }

    let app_state = AppState::new(store);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_app(app_state.clone()))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
