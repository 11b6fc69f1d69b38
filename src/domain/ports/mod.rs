pub mod key_value_store;
pub mod movie_repository;
pub mod seat_repository;
