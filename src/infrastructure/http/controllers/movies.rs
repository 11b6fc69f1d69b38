use crate::domain::entities::Movie;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{extract::State, Json};

pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.catalog_service.list_movies().await?;
    Ok(Json(movies))
}
