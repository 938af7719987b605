mod common;

use chrono::NaiveDate;
use chrono_tz::Asia::Bangkok;

use common::{at, hm, load_catalog, load_movie, movie, today};
use showtime_picker_lambda_rust::cinema_api::CinemaApi;
use showtime_picker_lambda_rust::error::ShowtimeError;
use showtime_picker_lambda_rust::resolver::{filter_slots, is_past, resolve};

#[test]
fn parses_catalog_and_skips_unusable_dates() {
    let catalog = load_catalog();
    let ids: Vec<u32> = catalog.iter().map(|s| s.id).collect();
    // Record 7 has an unparseable Showdate.
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 8]);

    let first = &catalog[0];
    assert_eq!(first.movie_id, 7);
    assert_eq!(first.theater_id, 1);
    // Already in the cinema zone (+07:00), so the wall clock is unchanged.
    assert_eq!(first.show_at, at("2024-06-01T10:00"));

    // Naive timestamps are accepted too.
    assert_eq!(catalog[6].show_at, at("2024-06-05T20:00"));
}

#[test]
fn parses_movie_document() {
    let movie = load_movie();
    assert_eq!(movie.id, 7);
    assert_eq!(movie.name, "Dune: Part Two");
    assert_eq!(movie.duration_minutes, 166);
    assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(movie.rating, None);
    assert_eq!(movie.release_day(), NaiveDate::from_ymd_opt(2024, 2, 29));
}

#[test]
fn malformed_documents_are_data_unavailable() {
    assert!(matches!(CinemaApi::parse_catalog("{\"error\":\"boom\"}", Bangkok), Err(ShowtimeError::DataUnavailable(_))));
    assert!(matches!(CinemaApi::parse_movie("not json"), Err(ShowtimeError::DataUnavailable(_))));
    assert!(CinemaApi::parse_catalog("[]", Bangkok).unwrap().is_empty());
}

#[test]
fn builds_poster_url_from_movie_id() {
    let api = CinemaApi::new("http://localhost:8000/api/", Bangkok);
    assert_eq!(api.base_url(), "http://localhost:8000/api");
    assert_eq!(api.poster_url(7), "http://localhost:8000/api/movie/7/poster");
}

#[test]
fn utc_showdate_is_converted_into_cinema_zone() {
    // 18:00 UTC on June 1 is 01:00 on June 2 in Bangkok.
    let body = r#"[
        { "ID": 1, "MovieID": 7, "TheaterID": 1, "Showdate": "2024-06-01T18:00:00Z" },
        { "ID": 2, "MovieID": 7, "TheaterID": 2, "Showdate": "2024-06-01T20:00:00+09:00" }
    ]"#;
    let catalog = CinemaApi::parse_catalog(body, Bangkok).expect("parse_catalog failed");
    assert_eq!(catalog[0].show_at, at("2024-06-02T01:00"));
    assert_eq!(catalog[1].show_at, at("2024-06-01T18:00"));

    let dune = movie(7, "Dune");
    assert_eq!(filter_slots(&catalog, &dune, 0, today()), vec![hm("18:00")]);
    assert_eq!(filter_slots(&catalog, &dune, 1, today()), vec![hm("01:00")]);

    // Bangkok 19:00 on June 1: the 01:00 show next day is still ahead.
    let now = at("2024-06-01T19:00");
    assert!(!is_past(hm("01:00"), 1, today(), now));
    assert!(is_past(hm("18:00"), 0, today(), now));

    let resolution = resolve(&catalog, &dune, 1, hm("01:00"), today()).expect("resolved");
    assert_eq!(resolution.booking.showtime_id, 1);
}
