pub mod booking;
pub mod movie;
pub mod showtime;
