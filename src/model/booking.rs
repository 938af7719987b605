use serde::{Deserialize, Serialize};

/// Payload handed to the seat-booking stage once a selection resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBooking {
    pub showtime_id: u32,
    pub theater_id: u32,
    pub movie_id: u32,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub booking: ResolvedBooking,
    // Number of catalog entries that matched; more than one means the first was picked.
    pub candidates: usize,
}

impl Resolution {
    pub fn is_ambiguous(&self) -> bool {
        self.candidates > 1
    }
}
