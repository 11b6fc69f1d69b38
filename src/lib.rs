pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::services::{CatalogService, ReservationService, SeatLock};
pub use config::Config;
pub use infrastructure::persistence::Database;
