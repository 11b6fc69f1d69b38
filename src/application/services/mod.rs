pub mod catalog_service;
pub mod reservation_service;
pub mod seat_lock;

pub use catalog_service::CatalogService;
pub use reservation_service::ReservationService;
pub use seat_lock::SeatLock;
