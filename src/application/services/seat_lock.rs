use crate::domain::ports::key_value_store::KeyValueStore;
use crate::infrastructure::http::middleware::error::ApiResult;
use std::sync::Arc;
use std::time::Duration;

/// Per-seat mutual exclusion built on the key-value store's conditional set.
///
/// Acquisition is fail-fast admission control: a contended seat rejects the
/// caller immediately instead of queueing. The lock entry always carries an
/// expiry, so a holder that crashes between acquire and release cannot keep
/// the seat locked past the TTL.
#[derive(Clone)]
pub struct SeatLock {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl SeatLock {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    fn lock_key(screen_id: i64, seat_id: &str) -> String {
        format!("lock:seat:{}:{}", screen_id, seat_id)
    }

    /// Try to take the lock for `holder_id`. Returns false if another holder
    /// currently owns it. A store error means acquisition did not happen; the
    /// caller must not assume it holds the lock.
    pub async fn acquire(&self, screen_id: i64, seat_id: &str, holder_id: &str) -> ApiResult<bool> {
        let key = Self::lock_key(screen_id, seat_id);
        let acquired = self.store.set_if_absent(&key, holder_id, self.ttl).await?;
        if acquired {
            tracing::debug!("Lock {} acquired by {}", key, holder_id);
        } else {
            tracing::debug!("Lock {} contended, rejecting {}", key, holder_id);
        }
        Ok(acquired)
    }

    /// Drop the lock regardless of who holds it. Unconditional delete keeps a
    /// seat from ever staying locked behind a dead holder; the TTL bounds the
    /// window in which a slow holder could delete a successor's lock.
    pub async fn release(&self, screen_id: i64, seat_id: &str) -> ApiResult<()> {
        self.store.delete(&Self::lock_key(screen_id, seat_id)).await
    }
}
