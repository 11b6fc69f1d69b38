use crate::domain::entities::{Movie, Screen};
use crate::domain::ports::movie_repository::MovieRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl MovieRepository for Database {
    async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        let rows = sqlx::query(
            "SELECT id, title, genre, running_time_minutes, created_at
             FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            movies.push(Movie {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                genre: row.try_get("genre")?,
                running_time_minutes: row.try_get("running_time_minutes")?,
                created_at: row.try_get("created_at")?,
            });
        }
        Ok(movies)
    }

    async fn screens_for_movie(&self, movie_id: i64) -> ApiResult<Vec<Screen>> {
        let rows = sqlx::query(
            "SELECT id, movie_id, starts_at, theater, created_at
             FROM screens WHERE movie_id = ? ORDER BY starts_at",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;

        let mut screens = Vec::with_capacity(rows.len());
        for row in rows {
            screens.push(Screen {
                id: row.try_get("id")?,
                movie_id: row.try_get("movie_id")?,
                starts_at: row.try_get("starts_at")?,
                theater: row.try_get("theater")?,
                created_at: row.try_get("created_at")?,
            });
        }
        Ok(screens)
    }
}
