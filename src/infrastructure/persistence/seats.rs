use crate::domain::entities::{SeatInfo, SeatStatus};
use crate::domain::ports::seat_repository::SeatRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

fn parse_status(raw: &str) -> ApiResult<SeatStatus> {
    SeatStatus::parse(raw)
        .ok_or_else(|| ApiError::Internal(format!("Unrecognized seat status in database: {}", raw)))
}

#[async_trait]
impl SeatRepository for Database {
    async fn screen_seats(&self, screen_id: i64) -> ApiResult<Vec<SeatInfo>> {
        let rows = sqlx::query(
            "SELECT seat_id, status FROM seats WHERE screen_id = ? ORDER BY seat_id",
        )
        .bind(screen_id)
        .fetch_all(&self.pool)
        .await?;

        let mut seats = Vec::with_capacity(rows.len());
        for row in rows {
            let status: String = row.try_get("status")?;
            seats.push(SeatInfo {
                seat_id: row.try_get("seat_id")?,
                status: parse_status(&status)?,
            });
        }
        Ok(seats)
    }

    async fn seat_status(&self, screen_id: i64, seat_id: &str) -> ApiResult<Option<SeatStatus>> {
        let row = sqlx::query("SELECT status FROM seats WHERE screen_id = ? AND seat_id = ?")
            .bind(screen_id)
            .bind(seat_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Ok(None),
            Some(row) => {
                let status: String = row.try_get("status")?;
                Ok(Some(parse_status(&status)?))
            }
        }
    }

    async fn mark_reserved(&self, screen_id: i64, seat_id: &str) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        // Guarded on the current status: the transition is one-way even if a
        // stale cache let a second reservation attempt get this far.
        let result = sqlx::query(
            "UPDATE seats
             SET status = 'reserved', updated_at = ?
             WHERE screen_id = ? AND seat_id = ? AND status = 'available'",
        )
        .bind(&now)
        .bind(screen_id)
        .bind(seat_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Zero rows is either a missing seat or one already reserved.
            return match self.seat_status(screen_id, seat_id).await? {
                None => Err(ApiError::NotFound("Seat not found".to_string())),
                Some(_) => Err(ApiError::Conflict("Seat already reserved".to_string())),
            };
        }

        Ok(())
    }
}
