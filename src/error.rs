use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Everything that can go wrong while picking a showtime. None of these are fatal:
/// the caller surfaces the message and lets the user change the selection or retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowtimeError {
    /// A fetch failed or has not completed yet.
    #[error("Showtime data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Showtime not found for movie {movie_id} on {date} at {}", .time.format("%H:%M"))]
    NotFound {
        movie_id: u32,
        date: NaiveDate,
        time: NaiveTime,
    },

    #[error("Day offset {offset} is outside the {window}-day window")]
    DayOutOfWindow { offset: u32, window: u32 },

    #[error("Day offset {0} is past the last representable date")]
    DateOutOfRange(u32),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("No showtime at {} on the selected day", .0.format("%H:%M"))]
    SlotUnavailable(NaiveTime),

    #[error("The {} showtime has already started", .0.format("%H:%M"))]
    SlotInPast(NaiveTime),

    #[error("Select a time before choosing seats")]
    NoTimeSelected,

    #[error("Invalid configuration: {0}")]
    Config(String),
}
