pub mod error;

pub use error::{ApiError, ApiResult};

use crate::application::services::{CatalogService, ReservationService};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub reservation_service: ReservationService,
}
