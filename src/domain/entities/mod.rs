pub mod movie;
pub mod seat;

pub use movie::{Movie, Screen};
pub use seat::{ReserveSeatRequest, ReserveSeatResponse, SeatInfo, SeatStatus};
