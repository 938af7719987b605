use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Showtime exactly as the cinema API returns it. The nested movie object is ignored;
/// matching happens on `MovieID`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShowtimeRecord {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "MovieID")]
    pub movie_id: u32,
    #[serde(rename = "TheaterID")]
    pub theater_id: u32,
    #[serde(rename = "Showdate")]
    pub show_date: Option<String>,
}

/// One scheduled screening with its local wall-clock start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Showtime {
    pub id: u32,
    pub movie_id: u32,
    pub theater_id: u32,
    pub show_at: NaiveDateTime,
}

impl Showtime {
    pub fn date(&self) -> NaiveDate {
        self.show_at.date()
    }

    /// Start time truncated to the minute, the precision slots are shown and matched at.
    pub fn slot(&self) -> NaiveTime {
        to_slot(self.show_at.time())
    }
}

impl Showtime {
    /// Build a showtime from an API record, expressing its start in the cinema's wall clock.
    pub fn from_record(record: ShowtimeRecord, tz: Tz) -> Result<Self, String> {
        let raw = record
            .show_date
            .as_deref()
            .ok_or_else(|| format!("Showtime {} has no Showdate", record.id))?;
        let show_at = parse_show_date(raw, tz)
            .ok_or_else(|| format!("Showtime {} has an invalid Showdate: {}", record.id, raw))?;
        Ok(Showtime {
            id: record.id,
            movie_id: record.movie_id,
            theater_id: record.theater_id,
            show_at,
        })
    }
}

/// Convert API records into showtimes in the cinema's zone, skipping the ones without a
/// usable timestamp.
pub fn from_records(records: Vec<ShowtimeRecord>, tz: Tz) -> Vec<Showtime> {
    records
        .into_iter()
        .filter_map(|record| match Showtime::from_record(record, tz) {
            Ok(showtime) => Some(showtime),
            Err(e) => {
                warn!(error = %e, "Skipping showtime record");
                None
            }
        })
        .collect()
}

/// Drop seconds and below so `10:00:30` and `10:00` land on the same slot.
pub fn to_slot(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

// Offset-bearing timestamps are converted into `tz`; naive ones are already cinema wall clock.
fn parse_show_date(s: &str, tz: Tz) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&tz).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|pat| NaiveDateTime::parse_from_str(s, pat).ok())
}
