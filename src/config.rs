use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Expiry of the per-seat reservation lock. Generously above worst-case
    /// end-to-end reservation latency so a live holder is never expired out
    /// from under its own request, yet bounded so a crashed holder self-heals.
    pub seat_lock_ttl: Duration,
    /// TTL of read-through cache entries (seat status and per-screen catalog).
    pub seat_cache_ttl: Duration,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cineseat.db?mode=rwc".to_string());

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let seat_lock_ttl_seconds = env::var("SEAT_LOCK_TTL_SECONDS")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .unwrap_or(100);

        let seat_cache_ttl_seconds = env::var("SEAT_CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300);

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "cineseat".to_string());

        Ok(Config {
            database_url,
            redis_url,
            server_host,
            server_port,
            seat_lock_ttl: Duration::from_secs(seat_lock_ttl_seconds),
            seat_cache_ttl: Duration::from_secs(seat_cache_ttl_seconds),
            service_name,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}
