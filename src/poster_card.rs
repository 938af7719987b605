use chrono::NaiveDate;
use serde::Serialize;

use crate::model::movie::{non_blank, Movie};

/// Details shown in the modal opened from a poster card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    pub name: String,
    pub duration_minutes: u32,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub synopsis: String,
}

/// Poster card for the movie list. `details` stays empty until the movie has loaded,
/// which also keeps the modal closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterCard {
    pub movie_id: u32,
    pub poster_url: String,
    pub title: String,
    pub details: Option<MovieDetails>,
}

impl PosterCard {
    pub fn new(movie_id: u32, poster_url: String, movie: Option<&Movie>) -> Self {
        let title = movie
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "Loading...".to_string());
        let details = movie.map(|m| MovieDetails {
            name: m.name.clone(),
            duration_minutes: m.duration_minutes,
            genre: non_blank(m.genre.as_deref()).map(str::to_string),
            director: non_blank(m.director.as_deref()).map(str::to_string),
            actors: non_blank(m.actors.as_deref()).map(str::to_string),
            release_date: m.release_day(),
            synopsis: m.synopsis.clone().unwrap_or_default(),
        });
        PosterCard { movie_id, poster_url, title, details }
    }

    /// Movie id handed to the booking screen by the modal's "Booking" button.
    /// `None` while the movie is still loading.
    pub fn booking_target(&self) -> Option<u32> {
        self.details.as_ref().map(|_| self.movie_id)
    }

    /// Detail lines in modal order, skipping fields the movie does not have.
    pub fn detail_lines(&self) -> Vec<String> {
        let Some(d) = &self.details else {
            return Vec::new();
        };
        let mut lines = vec![format!("Duration: {} minutes", d.duration_minutes)];
        if let Some(genre) = &d.genre {
            lines.push(format!("Type: {}", genre));
        }
        if let Some(director) = &d.director {
            lines.push(format!("Director: {}", director));
        }
        if let Some(actors) = &d.actors {
            lines.push(format!("Actors: {}", actors));
        }
        if let Some(date) = d.release_date {
            lines.push(format!("Release Date: {}", date.format("%-d/%-m/%Y")));
        }
        lines
    }
}
