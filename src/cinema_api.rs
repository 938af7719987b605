use chrono_tz::Tz;
use tracing::{error, info, info_span, instrument};

use crate::error::ShowtimeError;
use crate::model::movie::Movie;
use crate::model::showtime::{self, Showtime, ShowtimeRecord};

/// Client for the cinema REST API that serves movies, showtimes and posters.
#[derive(Debug, Clone)]
pub struct CinemaApi {
    base_url: String,
    // Zone showtimes are converted into before slot matching.
    timezone: Tz,
}

impl CinemaApi {
    pub fn new(base_url: &str, timezone: Tz) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), timezone }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Poster image location for a movie. Pure string construction, nothing is fetched.
    pub fn poster_url(&self, movie_id: u32) -> String {
        format!("{}/movie/{}/poster", self.base_url, movie_id)
    }

    /// Fetch one movie's metadata.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_movie_by_id(&self, movie_id: u32) -> Result<Movie, ShowtimeError> {
        let url = format!("{}/movie/{}", self.base_url, movie_id);
        let body = Self::get(&url)?;
        let movie = Self::parse_movie(&body)?;
        info!(movie_id = movie.id, name = %movie.name, "Fetched movie");
        Ok(movie)
    }

    /// Fetch the full, unfiltered showtime catalog.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_showtime_catalog(&self) -> Result<Vec<Showtime>, ShowtimeError> {
        let url = format!("{}/showtimes", self.base_url);
        let body = Self::get(&url)?;
        let catalog = Self::parse_catalog(&body, self.timezone)?;
        info!(showtimes = catalog.len(), "Fetched showtime catalog");
        Ok(catalog)
    }

    /// Parse a movie document (no network).
    pub fn parse_movie(body: &str) -> Result<Movie, ShowtimeError> {
        serde_json::from_str::<Movie>(body).map_err(|e| {
            error!(error = %e, "Failed to deserialize movie");
            ShowtimeError::DataUnavailable(format!("Failed to deserialize movie: {}", e))
        })
    }

    /// Parse a showtime catalog (no network) with start times in `tz` wall clock.
    /// Records without a usable date are dropped.
    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    pub fn parse_catalog(body: &str, tz: Tz) -> Result<Vec<Showtime>, ShowtimeError> {
        let records = serde_json::from_str::<Vec<ShowtimeRecord>>(body).map_err(|e| {
            error!(error = %e, "Failed to deserialize showtime catalog");
            ShowtimeError::DataUnavailable(format!("Failed to deserialize showtime catalog: {}", e))
        })?;
        Ok(showtime::from_records(records, tz))
    }

    fn get(url: &str) -> Result<String, ShowtimeError> {
        let response = {
            let _span = info_span!("cinema_api_fetch", url = %url).entered();
            ureq::get(url).call()
        };
        match response {
            Ok(response) => {
                let mut body_reader = response.into_body();
                body_reader.read_to_string().map_err(|e| {
                    error!(error = %e, url = %url, "Failed to read response body");
                    ShowtimeError::DataUnavailable(format!("Failed to read response body: {}", e))
                })
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                Err(ShowtimeError::DataUnavailable(format!("Request failed: {}", e)))
            }
        }
    }
}
