use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, instrument, warn};

use crate::date_window::target_date;
use crate::error::ShowtimeError;
use crate::model::booking::{Resolution, ResolvedBooking};
use crate::model::movie::Movie;
use crate::model::showtime::{to_slot, Showtime};

/// Slot display format, also the format accepted for user time selections.
pub const SLOT_FORMAT: &str = "%H:%M";

/// Parse a user-supplied `HH:MM` time selection.
pub fn parse_slot(s: &str) -> Result<NaiveTime, ShowtimeError> {
    NaiveTime::parse_from_str(s.trim(), SLOT_FORMAT)
        .map_err(|_| ShowtimeError::InvalidTime(s.to_string()))
}

pub fn format_slot(slot: NaiveTime) -> String {
    slot.format(SLOT_FORMAT).to_string()
}

/// Time slots for `movie` on `today + day_offset`, ascending and without duplicates.
/// An empty list means there is nothing to show that day.
///
/// Showtimes of the movie starting at the same minute in different theaters collapse
/// into a single slot, so the list can be shorter than the number of matching
/// showtimes. [`resolve`] picks the first of them in catalog order and reports the
/// ambiguity through [`Resolution::candidates`].
pub fn filter_slots(catalog: &[Showtime], movie: &Movie, day_offset: u32, today: NaiveDate) -> Vec<NaiveTime> {
    let Some(date) = target_date(today, day_offset) else {
        return Vec::new();
    };

    let mut slots: Vec<NaiveTime> = catalog
        .iter()
        .filter(|st| st.movie_id == movie.id && st.date() == date)
        .map(Showtime::slot)
        .collect();
    // Catalog order is whatever the API returned; order by time explicitly.
    slots.sort();
    // Two theaters starting at the same minute share one slot.
    slots.dedup();
    slots
}

/// True when `today + day_offset` at `slot` is strictly before `now`.
pub fn is_past(slot: NaiveTime, day_offset: u32, today: NaiveDate, now: NaiveDateTime) -> bool {
    match target_date(today, day_offset) {
        Some(date) => date.and_time(to_slot(slot)) < now,
        None => false,
    }
}

/// Map a day + time selection back to one concrete showtime of `movie`.
///
/// When several showtimes share the same start (different theaters), the first one in
/// catalog order wins and the resolution is flagged as ambiguous.
#[instrument(level = "info", skip(catalog, movie), fields(movie_id = movie.id, catalog_len = catalog.len()))]
pub fn resolve(
    catalog: &[Showtime],
    movie: &Movie,
    day_offset: u32,
    slot: NaiveTime,
    today: NaiveDate,
) -> Result<Resolution, ShowtimeError> {
    let date = target_date(today, day_offset).ok_or(ShowtimeError::DateOutOfRange(day_offset))?;
    let slot = to_slot(slot);

    let mut matches = catalog
        .iter()
        .filter(|st| st.movie_id == movie.id && st.date() == date && st.slot() == slot);

    let Some(first) = matches.next() else {
        debug!(%date, time = %format_slot(slot), "No showtime matches selection");
        return Err(ShowtimeError::NotFound { movie_id: movie.id, date, time: slot });
    };
    let candidates = 1 + matches.count();
    if candidates > 1 {
        warn!(
            %date,
            time = %format_slot(slot),
            candidates,
            showtime_id = first.id,
            theater_id = first.theater_id,
            "Ambiguous showtime match; using first in catalog order"
        );
    }

    Ok(Resolution {
        booking: ResolvedBooking {
            showtime_id: first.id,
            theater_id: first.theater_id,
            movie_id: movie.id,
        },
        candidates,
    })
}
