use chrono::{NaiveDateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::booking_screen::{BookingScreen, BookingView};
use crate::cinema_api::CinemaApi;
use crate::config::Config;
use crate::error::ShowtimeError;
use crate::model::booking::ResolvedBooking;
use crate::model::movie::Movie;
use crate::model::showtime::Showtime;
use crate::poster_card::PosterCard;
use crate::resolver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Booking,
    Poster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub screen: Screen,
    pub movie_id: u32,
    #[serde(default)]
    pub day_offset: u32,
    /// `HH:MM`; when present the selection is resolved into a booking.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenView {
    Booking(BookingView),
    Poster(PosterCard),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub message: String,
    pub view: ScreenView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<ResolvedBooking>,
}

#[instrument(skip(event, config))]
pub async fn handler(event: LambdaEvent<Request>, config: Config) -> Result<Response, Error> {
    let payload = event.payload; // Derived from the Lambda event
    let base_url = payload.api_base_url.clone().unwrap_or_else(|| config.api_base_url.clone());
    let api = CinemaApi::new(&base_url, config.timezone);
    let now = config.local_now(Utc::now());

    match payload.screen {
        Screen::Poster => {
            let movie = fetch_movie(api.clone(), payload.movie_id).await;
            Ok(render_poster(&api, payload.movie_id, movie))
        }
        Screen::Booking => {
            // Both fetches run concurrently on the blocking pool; either may fail on its own.
            let (movie, catalog) = tokio::join!(
                fetch_movie(api.clone(), payload.movie_id),
                fetch_catalog(api.clone())
            );

            Ok(render_booking(&api, &payload, config.window_days, movie, catalog, now))
        }
    }
}

async fn fetch_movie(api: CinemaApi, movie_id: u32) -> Result<Movie, ShowtimeError> {
    match tokio::task::spawn_blocking(move || api.fetch_movie_by_id(movie_id)).await {
        Ok(result) => result,
        Err(e) => Err(ShowtimeError::DataUnavailable(format!("Movie fetch task join error: {}", e))),
    }
}

async fn fetch_catalog(api: CinemaApi) -> Result<Vec<Showtime>, ShowtimeError> {
    match tokio::task::spawn_blocking(move || api.fetch_showtime_catalog()).await {
        Ok(result) => result,
        Err(e) => Err(ShowtimeError::DataUnavailable(format!("Catalog fetch task join error: {}", e))),
    }
}

/// Build the poster card response. A failed fetch renders the loading card.
pub fn render_poster(api: &CinemaApi, movie_id: u32, movie: Result<Movie, ShowtimeError>) -> Response {
    let movie = match movie {
        Ok(movie) => Some(movie),
        Err(e) => {
            warn!(error = %e, movie_id, "Movie unavailable for poster card");
            None
        }
    };
    let card = PosterCard::new(movie_id, api.poster_url(movie_id), movie.as_ref());
    let message = match &movie {
        Some(m) => format!("Poster card for {}", m.name),
        None => "Movie details unavailable".to_string(),
    };
    Response { message, view: ScreenView::Poster(card), booking: None }
}

/// Apply the requested selection to freshly loaded data and render the booking screen.
/// Fetch failures leave the screen in its loading state; selection errors become the message.
pub fn render_booking(
    api: &CinemaApi,
    request: &Request,
    window_days: u32,
    movie: Result<Movie, ShowtimeError>,
    catalog: Result<Vec<Showtime>, ShowtimeError>,
    now: NaiveDateTime,
) -> Response {
    let today = now.date();
    let mut screen = BookingScreen::new(request.movie_id, window_days, api.poster_url(request.movie_id));

    match movie {
        Ok(movie) => screen.load_movie(movie),
        Err(e) => error!(error = %e, movie_id = request.movie_id, "Movie unavailable"),
    }
    match catalog {
        Ok(catalog) => screen.load_catalog(catalog),
        Err(e) => error!(error = %e, "Showtime catalog unavailable"),
    }

    let outcome = apply_selection(&mut screen, request, now);
    let (message, booking) = match outcome {
        Ok(Some(booking)) => (
            format!(
                "Showtime {} in theater {} selected for movie {}",
                booking.showtime_id, booking.theater_id, booking.movie_id
            ),
            Some(booking),
        ),
        Ok(None) => ("Select a time to continue".to_string(), None),
        Err(e) => {
            info!(error = %e, "Selection not resolved");
            (e.to_string(), None)
        }
    };

    Response { message, view: ScreenView::Booking(screen.view(today, now)), booking }
}

fn apply_selection(
    screen: &mut BookingScreen,
    request: &Request,
    now: NaiveDateTime,
) -> Result<Option<ResolvedBooking>, ShowtimeError> {
    let today = now.date();
    screen.select_day(request.day_offset)?;
    let Some(time) = request.time.as_deref() else {
        // Surface "not loaded yet" even when no time was requested.
        screen.slots(today)?;
        return Ok(None);
    };
    let slot = resolver::parse_slot(time)?;
    screen.select_time(slot, today, now)?;
    screen.confirm(today).map(Some)
}
