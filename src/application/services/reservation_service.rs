use crate::application::services::SeatLock;
use crate::domain::entities::SeatStatus;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::ports::seat_repository::SeatRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::sync::Arc;
use std::time::Duration;

/// End-to-end seat reservation, serialized per seat by the distributed lock.
///
/// For a fixed (screen, seat) pair at most one request at a time runs the
/// read-validate-commit sequence; requests that lose the lock race are
/// rejected immediately rather than queued.
#[derive(Clone)]
pub struct ReservationService {
    seat_repo: Arc<dyn SeatRepository>,
    cache: Arc<dyn KeyValueStore>,
    lock: SeatLock,
    cache_ttl: Duration,
}

impl ReservationService {
    pub fn new(
        seat_repo: Arc<dyn SeatRepository>,
        cache: Arc<dyn KeyValueStore>,
        lock: SeatLock,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            seat_repo,
            cache,
            lock,
            cache_ttl,
        }
    }

    fn seat_key(screen_id: i64, seat_id: &str) -> String {
        format!("seat:{}:{}", screen_id, seat_id)
    }

    pub async fn reserve(&self, screen_id: i64, seat_id: &str, client_id: &str) -> ApiResult<()> {
        if !self.lock.acquire(screen_id, seat_id, client_id).await? {
            return Err(ApiError::Locked(
                "Seat is being reserved by another user".to_string(),
            ));
        }

        // Lock held from here on. Run the guarded section, then release on
        // every exit path before surfacing its result.
        let result = self.reserve_locked(screen_id, seat_id).await;

        if let Err(e) = self.lock.release(screen_id, seat_id).await {
            // The entry expires on its own; do not fail the request over it.
            tracing::warn!(
                "Failed to release lock for seat {} on screen {}: {}",
                seat_id,
                screen_id,
                e
            );
        }

        result
    }

    async fn reserve_locked(&self, screen_id: i64, seat_id: &str) -> ApiResult<()> {
        let seat_key = Self::seat_key(screen_id, seat_id);

        let status = match self.cache.get(&seat_key).await? {
            Some(raw) => SeatStatus::parse(&raw).ok_or_else(|| {
                ApiError::Internal(format!("Unrecognized cached seat status: {}", raw))
            })?,
            None => {
                tracing::debug!(
                    "Seat {} on screen {} not cached, fetching from database",
                    seat_id,
                    screen_id
                );
                let status = self
                    .seat_repo
                    .seat_status(screen_id, seat_id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("Seat not found".to_string()))?;
                self.cache
                    .set(&seat_key, status.as_str(), Some(self.cache_ttl))
                    .await?;
                status
            }
        };

        if status == SeatStatus::Reserved {
            return Err(ApiError::Conflict("Seat already reserved".to_string()));
        }

        // The durable store commits first; the cache is strictly derivative
        // and only ever reflects a committed reservation. The guarded update
        // rejects a seat that is reserved or missing, whatever the cache said.
        self.seat_repo.mark_reserved(screen_id, seat_id).await?;

        // Written without expiry: a reserved seat must not lapse back to
        // available in the cache.
        if let Err(e) = self
            .cache
            .set(&seat_key, SeatStatus::Reserved.as_str(), None)
            .await
        {
            tracing::warn!(
                "Seat {} on screen {} reserved but cache update failed: {}",
                seat_id,
                screen_id,
                e
            );
        }

        tracing::info!("Seat {} on screen {} reserved", seat_id, screen_id);
        Ok(())
    }
}
