pub mod booking_screen;
pub mod cinema_api;
pub mod config;
pub mod date_window;
pub mod error;
pub mod handler;
pub mod model;
pub mod poster_card;
pub mod resolver;
