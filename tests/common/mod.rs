#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use showtime_picker_lambda_rust::cinema_api::CinemaApi;
use showtime_picker_lambda_rust::model::movie::Movie;
use showtime_picker_lambda_rust::model::showtime::Showtime;

pub fn load_catalog() -> Vec<Showtime> {
    let json = std::fs::read_to_string("tests/sample_showtimes.json").expect("failed to read sample_showtimes.json");
    CinemaApi::parse_catalog(&json, chrono_tz::Asia::Bangkok).expect("parse_catalog failed")
}

pub fn load_movie() -> Movie {
    let json = std::fs::read_to_string("tests/sample_movie.json").expect("failed to read sample_movie.json");
    CinemaApi::parse_movie(&json).expect("parse_movie failed")
}

pub fn movie(id: u32, name: &str) -> Movie {
    Movie {
        id,
        name: name.to_string(),
        duration_minutes: 120,
        director: None,
        genre: None,
        synopsis: None,
        actors: None,
        release_date: None,
        rating: None,
    }
}

pub fn showtime(id: u32, movie_id: u32, theater_id: u32, show_at: &str) -> Showtime {
    Showtime {
        id,
        movie_id,
        theater_id,
        show_at: at(show_at),
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// 2024-06-01 14:00, the reference "now" used across tests.
pub fn now() -> NaiveDateTime {
    at("2024-06-01T14:00")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

pub fn hm(s: &str) -> chrono::NaiveTime {
    chrono::NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}
