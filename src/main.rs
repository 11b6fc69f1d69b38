use cineseat::application::services::{CatalogService, ReservationService, SeatLock};
use cineseat::config::Config;
use cineseat::domain::ports::key_value_store::KeyValueStore;
use cineseat::domain::ports::movie_repository::MovieRepository;
use cineseat::domain::ports::seat_repository::SeatRepository;
use cineseat::infrastructure::cache::RedisStore;
use cineseat::infrastructure::http::middleware::AppState;
use cineseat::infrastructure::http::router::build_router;
use cineseat::infrastructure::persistence::Database;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cineseat=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("{} configuration loaded", config.service_name);

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Initialize the key-value store
    let cache = Arc::new(RedisStore::connect(&config.redis_url).await?) as Arc<dyn KeyValueStore>;
    tracing::info!("Redis connection established");

    // Adapters are constructed once here and injected by reference; nothing
    // downstream reaches for ambient connection state.
    let seat_repo = Arc::new(db.clone()) as Arc<dyn SeatRepository>;
    let movie_repo = Arc::new(db) as Arc<dyn MovieRepository>;

    let lock = SeatLock::new(cache.clone(), config.seat_lock_ttl);
    let catalog_service = CatalogService::new(
        movie_repo,
        seat_repo.clone(),
        cache.clone(),
        config.seat_cache_ttl,
    );
    let reservation_service =
        ReservationService::new(seat_repo, cache, lock, config.seat_cache_ttl);

    let state = AppState {
        catalog_service,
        reservation_service,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
