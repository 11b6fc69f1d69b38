pub mod movies;
pub mod screens;
pub mod seats;
