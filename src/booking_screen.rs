use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::{info, instrument};

use crate::date_window::{self, DateCard};
use crate::error::ShowtimeError;
use crate::model::booking::ResolvedBooking;
use crate::model::movie::{non_blank, Movie};
use crate::model::showtime::Showtime;
use crate::resolver;

pub const NO_SHOWTIMES_NOTICE: &str = "No showtimes available";
pub const LOADING_NOTICE: &str = "Loading showtimes...";

/// Where the selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Entry state; day 0 is preselected.
    NoDay,
    DaySelected,
    TimeSelected,
    Resolved(ResolvedBooking),
    NotFound,
}

/// Header block of the booking screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub name: String,
    pub genre: String,
    pub duration: String,
    pub director: String,
    pub rating: Option<f32>,
    pub synopsis: String,
}

impl MovieSummary {
    pub fn from_movie(movie: &Movie) -> Self {
        MovieSummary {
            name: movie.name.clone(),
            genre: non_blank(movie.genre.as_deref()).unwrap_or("Unknown Genre").to_string(),
            duration: format_duration(movie.duration_minutes),
            director: non_blank(movie.director.as_deref()).unwrap_or("Unknown Director").to_string(),
            rating: movie.rating,
            synopsis: non_blank(movie.synopsis.as_deref()).unwrap_or("No synopsis available").to_string(),
        }
    }
}

/// `125` -> `2 hr 5 min`.
pub fn format_duration(minutes: u32) -> String {
    format!("{} hr {} min", minutes / 60, minutes % 60)
}

/// One time button. Past slots stay listed but cannot be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub time: String,
    pub past: bool,
    pub selected: bool,
}

/// Everything the booking screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    pub movie_id: u32,
    pub poster_url: String,
    pub movie: Option<MovieSummary>,
    pub dates: Vec<DateCard>,
    pub slots: Vec<SlotView>,
    pub selected_time: Option<String>,
    pub can_select_seat: bool,
    pub notice: Option<String>,
}

/// Selection state of the movie booking screen.
///
/// Movie and catalog arrive independently and in any order; until both are present
/// slot queries report [`ShowtimeError::DataUnavailable`].
#[derive(Debug, Clone)]
pub struct BookingScreen {
    movie_id: u32,
    poster_url: String,
    window_days: u32,
    movie: Option<Movie>,
    catalog: Option<Vec<Showtime>>,
    day_offset: u32,
    time: Option<NaiveTime>,
    state: SelectionState,
}

impl BookingScreen {
    pub fn new(movie_id: u32, window_days: u32, poster_url: String) -> Self {
        BookingScreen {
            movie_id,
            poster_url,
            window_days,
            movie: None,
            catalog: None,
            day_offset: 0,
            time: None,
            state: SelectionState::NoDay,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn day_offset(&self) -> u32 {
        self.day_offset
    }

    pub fn selected_time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    /// Store fetched movie metadata. A different movie invalidates the chosen time.
    pub fn load_movie(&mut self, movie: Movie) {
        if self.movie.as_ref().map(|m| m.id) != Some(movie.id) {
            self.clear_time();
        }
        self.movie_id = movie.id;
        self.movie = Some(movie);
    }

    pub fn load_catalog(&mut self, catalog: Vec<Showtime>) {
        self.catalog = Some(catalog);
    }

    /// Pick a day from the window. Always clears the time selection.
    pub fn select_day(&mut self, offset: u32) -> Result<(), ShowtimeError> {
        if offset >= self.window_days {
            return Err(ShowtimeError::DayOutOfWindow { offset, window: self.window_days });
        }
        self.day_offset = offset;
        self.time = None;
        self.state = SelectionState::DaySelected;
        Ok(())
    }

    /// Pick a time from the current slot list. Past slots are rejected.
    pub fn select_time(&mut self, slot: NaiveTime, today: NaiveDate, now: NaiveDateTime) -> Result<(), ShowtimeError> {
        let slot = crate::model::showtime::to_slot(slot);
        if !self.slots(today)?.contains(&slot) {
            return Err(ShowtimeError::SlotUnavailable(slot));
        }
        if resolver::is_past(slot, self.day_offset, today, now) {
            return Err(ShowtimeError::SlotInPast(slot));
        }
        self.time = Some(slot);
        self.state = SelectionState::TimeSelected;
        Ok(())
    }

    /// Slots for the selected movie and day.
    pub fn slots(&self, today: NaiveDate) -> Result<Vec<NaiveTime>, ShowtimeError> {
        let (movie, catalog) = self.loaded()?;
        Ok(resolver::filter_slots(catalog, movie, self.day_offset, today))
    }

    /// The "select seat" action: resolve the selection into a booking payload.
    #[instrument(level = "info", skip(self), fields(movie_id = self.movie_id, day_offset = self.day_offset))]
    pub fn confirm(&mut self, today: NaiveDate) -> Result<ResolvedBooking, ShowtimeError> {
        let slot = self.time.ok_or(ShowtimeError::NoTimeSelected)?;
        let (movie, catalog) = self.loaded()?;
        match resolver::resolve(catalog, movie, self.day_offset, slot, today) {
            Ok(resolution) => {
                info!(
                    showtime_id = resolution.booking.showtime_id,
                    theater_id = resolution.booking.theater_id,
                    ambiguous = resolution.is_ambiguous(),
                    "Resolved showtime"
                );
                self.state = SelectionState::Resolved(resolution.booking);
                Ok(resolution.booking)
            }
            Err(e) => {
                self.state = SelectionState::NotFound;
                Err(e)
            }
        }
    }

    /// Render the screen for the given moment.
    pub fn view(&self, today: NaiveDate, now: NaiveDateTime) -> BookingView {
        let (slots, notice) = match self.slots(today) {
            Ok(slots) if slots.is_empty() => (Vec::new(), Some(NO_SHOWTIMES_NOTICE.to_string())),
            Ok(slots) => {
                let views = slots
                    .into_iter()
                    .map(|slot| SlotView {
                        time: resolver::format_slot(slot),
                        past: resolver::is_past(slot, self.day_offset, today, now),
                        selected: self.time == Some(slot),
                    })
                    .collect();
                (views, None)
            }
            Err(_) => (Vec::new(), Some(LOADING_NOTICE.to_string())),
        };

        BookingView {
            movie_id: self.movie_id,
            poster_url: self.poster_url.clone(),
            movie: self.movie.as_ref().map(MovieSummary::from_movie),
            dates: date_window::date_cards(today, self.window_days, self.day_offset),
            can_select_seat: self.time.is_some(),
            selected_time: self.time.map(resolver::format_slot),
            slots,
            notice,
        }
    }

    fn loaded(&self) -> Result<(&Movie, &[Showtime]), ShowtimeError> {
        match (&self.movie, &self.catalog) {
            (Some(movie), Some(catalog)) => Ok((movie, catalog.as_slice())),
            (None, _) => Err(ShowtimeError::DataUnavailable("movie not loaded".to_string())),
            (_, None) => Err(ShowtimeError::DataUnavailable("showtime catalog not loaded".to_string())),
        }
    }

    fn clear_time(&mut self) {
        self.time = None;
        if self.state != SelectionState::NoDay {
            self.state = SelectionState::DaySelected;
        }
    }
}
