use crate::domain::entities::{Movie, Screen};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn list_movies(&self) -> ApiResult<Vec<Movie>>;

    /// Showings of one movie, ordered by start time.
    async fn screens_for_movie(&self, movie_id: i64) -> ApiResult<Vec<Screen>>;
}
