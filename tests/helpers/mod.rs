#![allow(dead_code)]


use async_trait::async_trait;
use cineseat::application::services::{CatalogService, ReservationService, SeatLock};
use cineseat::domain::entities::{Movie, Screen, SeatInfo, SeatStatus};
use cineseat::domain::ports::key_value_store::KeyValueStore;
use cineseat::domain::ports::movie_repository::MovieRepository;
use cineseat::domain::ports::seat_repository::SeatRepository;
use cineseat::infrastructure::http::middleware::{ApiError, ApiResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const TEST_LOCK_TTL: Duration = Duration::from_secs(100);
pub const TEST_CACHE_TTL: Duration = Duration::from_secs(300);

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

fn live(entry: &Entry) -> bool {
    entry.expires_at.map_or(true, |at| at > Instant::now())
}

/// TTL-honoring in-process stand-in for Redis.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live value of a key, honoring expiry.
    pub async fn value_of(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|e| live(e))
            .map(|e| e.value.clone())
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.value_of(key).await.is_some()
    }

    /// Remaining TTL; None when the key is missing or carries no expiry.
    pub async fn time_to_live(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.lock().await;
        let entry = entries.get(key).filter(|e| live(e))?;
        entry
            .expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// True when the key exists with no expiry at all.
    pub async fn persisted(&self, key: &str) -> bool {
        let entries = self.entries.lock().await;
        entries.get(key).map_or(false, |e| e.expires_at.is_none())
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> ApiResult<bool> {
        // Holding the map lock across check and write makes this one atomic
        // step, matching the real store's conditional set.
        let mut entries = self.entries.lock().await;
        if entries.get(key).map_or(false, |e| live(e)) {
            return Ok(false);
        }
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );
        Ok(true)
    }

    async fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.value_of(key).await)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApiResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|t| Instant::now() + t),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApiResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// In-process durable store with query counters and fault injection.
#[derive(Default)]
pub struct InMemorySeatRepository {
    seats: Mutex<HashMap<(i64, String), SeatStatus>>,
    status_queries: AtomicUsize,
    screen_queries: AtomicUsize,
    fail_updates: AtomicBool,
}

impl InMemorySeatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_seat(&self, screen_id: i64, seat_id: &str, status: SeatStatus) {
        self.seats
            .lock()
            .await
            .insert((screen_id, seat_id.to_string()), status);
    }

    pub async fn status_of(&self, screen_id: i64, seat_id: &str) -> Option<SeatStatus> {
        self.seats
            .lock()
            .await
            .get(&(screen_id, seat_id.to_string()))
            .copied()
    }

    pub fn status_query_count(&self) -> usize {
        self.status_queries.load(Ordering::SeqCst)
    }

    pub fn screen_query_count(&self) -> usize {
        self.screen_queries.load(Ordering::SeqCst)
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SeatRepository for InMemorySeatRepository {
    async fn screen_seats(&self, screen_id: i64) -> ApiResult<Vec<SeatInfo>> {
        self.screen_queries.fetch_add(1, Ordering::SeqCst);
        let seats = self.seats.lock().await;
        let mut result: Vec<SeatInfo> = seats
            .iter()
            .filter(|((sid, _), _)| *sid == screen_id)
            .map(|((_, seat_id), status)| SeatInfo {
                seat_id: seat_id.clone(),
                status: *status,
            })
            .collect();
        result.sort_by(|a, b| a.seat_id.cmp(&b.seat_id));
        Ok(result)
    }

    async fn seat_status(&self, screen_id: i64, seat_id: &str) -> ApiResult<Option<SeatStatus>> {
        self.status_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.status_of(screen_id, seat_id).await)
    }

    async fn mark_reserved(&self, screen_id: i64, seat_id: &str) -> ApiResult<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(ApiError::ServiceUnavailable(
                "Database unreachable".to_string(),
            ));
        }
        let mut seats = self.seats.lock().await;
        match seats.get_mut(&(screen_id, seat_id.to_string())) {
            None => Err(ApiError::NotFound("Seat not found".to_string())),
            Some(SeatStatus::Reserved) => {
                Err(ApiError::Conflict("Seat already reserved".to_string()))
            }
            Some(status) => {
                *status = SeatStatus::Reserved;
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct StaticMovieRepository {
    pub movies: Vec<Movie>,
    pub screens: Vec<Screen>,
}

#[async_trait]
impl MovieRepository for StaticMovieRepository {
    async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    async fn screens_for_movie(&self, movie_id: i64) -> ApiResult<Vec<Screen>> {
        Ok(self
            .screens
            .iter()
            .filter(|s| s.movie_id == movie_id)
            .cloned()
            .collect())
    }
}

pub fn reservation_service(
    repo: Arc<InMemorySeatRepository>,
    kv: Arc<InMemoryKeyValueStore>,
) -> ReservationService {
    let lock = SeatLock::new(kv.clone() as Arc<dyn KeyValueStore>, TEST_LOCK_TTL);
    ReservationService::new(
        repo as Arc<dyn SeatRepository>,
        kv as Arc<dyn KeyValueStore>,
        lock,
        TEST_CACHE_TTL,
    )
}

pub fn catalog_service(
    movie_repo: Arc<StaticMovieRepository>,
    repo: Arc<InMemorySeatRepository>,
    kv: Arc<InMemoryKeyValueStore>,
) -> CatalogService {
    CatalogService::new(
        movie_repo as Arc<dyn MovieRepository>,
        repo as Arc<dyn SeatRepository>,
        kv as Arc<dyn KeyValueStore>,
        TEST_CACHE_TTL,
    )
}
