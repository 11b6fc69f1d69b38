use crate::domain::entities::{ReserveSeatRequest, ReserveSeatResponse, SeatInfo};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn get_seats(
    State(state): State<AppState>,
    Path(screen_id): Path<i64>,
) -> ApiResult<Json<Vec<SeatInfo>>> {
    let seats = state.catalog_service.seats_for_screen(screen_id).await?;
    Ok(Json(seats))
}

pub async fn reserve_seat(
    State(state): State<AppState>,
    Json(request): Json<ReserveSeatRequest>,
) -> ApiResult<Json<ReserveSeatResponse>> {
    state
        .reservation_service
        .reserve(request.screen_id, &request.seat_id, &request.client_id)
        .await?;

    Ok(Json(ReserveSeatResponse {
        message: "Seat reserved successfully".to_string(),
    }))
}
