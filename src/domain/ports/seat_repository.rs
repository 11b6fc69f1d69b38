use crate::domain::entities::{SeatInfo, SeatStatus};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

#[async_trait]
pub trait SeatRepository: Send + Sync {
    /// All seats of a screen, ordered by seat id. An unknown screen yields an
    /// empty list, not an error.
    async fn screen_seats(&self, screen_id: i64) -> ApiResult<Vec<SeatInfo>>;

    /// Current status of one seat, or None if no such seat exists.
    async fn seat_status(&self, screen_id: i64, seat_id: &str) -> ApiResult<Option<SeatStatus>>;

    /// Flip an available seat to reserved. The update is guarded on the
    /// current status, so the store itself enforces that a reservation can
    /// never be undone through this path. Returns NotFound if the seat does
    /// not exist and Conflict if it is already reserved.
    async fn mark_reserved(&self, screen_id: i64, seat_id: &str) -> ApiResult<()>;
}
