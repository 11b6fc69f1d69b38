use crate::domain::entities::{Movie, Screen, SeatInfo};
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::ports::movie_repository::MovieRepository;
use crate::domain::ports::seat_repository::SeatRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::sync::Arc;
use std::time::Duration;

/// Read side of the service: movie and screen listings plus the cache-aside
/// seat catalog.
///
/// The per-screen catalog entry is never invalidated by a reservation; it
/// self-heals by expiry. Callers may observe a seat as available for up to
/// the configured TTL after it was reserved. That staleness bound is part of
/// the endpoint's contract.
#[derive(Clone)]
pub struct CatalogService {
    movie_repo: Arc<dyn MovieRepository>,
    seat_repo: Arc<dyn SeatRepository>,
    cache: Arc<dyn KeyValueStore>,
    cache_ttl: Duration,
}

impl CatalogService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        seat_repo: Arc<dyn SeatRepository>,
        cache: Arc<dyn KeyValueStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            movie_repo,
            seat_repo,
            cache,
            cache_ttl,
        }
    }

    fn screen_seats_key(screen_id: i64) -> String {
        format!("seats:{}", screen_id)
    }

    pub async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        self.movie_repo.list_movies().await
    }

    pub async fn screens_for_movie(&self, movie_id: i64) -> ApiResult<Vec<Screen>> {
        self.movie_repo.screens_for_movie(movie_id).await
    }

    pub async fn seats_for_screen(&self, screen_id: i64) -> ApiResult<Vec<SeatInfo>> {
        let key = Self::screen_seats_key(screen_id);

        if let Some(cached) = self.cache.get(&key).await? {
            match serde_json::from_str::<Vec<SeatInfo>>(&cached) {
                Ok(seats) => {
                    tracing::debug!("Seats for screen {} served from cache", screen_id);
                    return Ok(seats);
                }
                Err(e) => {
                    tracing::warn!(
                        "Discarding unreadable seat catalog entry for screen {}: {}",
                        screen_id,
                        e
                    );
                }
            }
        }

        tracing::debug!(
            "Seats for screen {} not cached, fetching from database",
            screen_id
        );
        let seats = self.seat_repo.screen_seats(screen_id).await?;
        if seats.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No seats found for screen {}",
                screen_id
            )));
        }

        let payload = serde_json::to_string(&seats)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize seat catalog: {}", e)))?;
        if let Err(e) = self.cache.set(&key, &payload, Some(self.cache_ttl)).await {
            // Serving straight from the database is fine; only the cache
            // population failed.
            tracing::warn!("Failed to cache seats for screen {}: {}", screen_id, e);
        }

        Ok(seats)
    }
}
