use crate::domain::entities::Screen;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_screens(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<Vec<Screen>>> {
    let screens = state.catalog_service.screens_for_movie(movie_id).await?;
    Ok(Json(screens))
}
