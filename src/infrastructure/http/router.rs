use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/movies", get(controllers::movies::list_movies))
        .route("/api/screens/:movie_id", get(controllers::screens::list_screens))
        .route("/api/seats/:screen_id", get(controllers::seats::get_seats))
        .route("/api/seats/reserve", post(controllers::seats::reserve_seat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Load balancer health check
async fn health() -> &'static str {
    "Hello Load Balancer!"
}
