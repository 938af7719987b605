use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::date_window::DEFAULT_WINDOW_DAYS;
use crate::error::ShowtimeError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Bangkok;

/// Settings read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Zone the cinema's wall-clock showtimes are expressed in.
    pub timezone: Tz,
    pub window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            timezone: DEFAULT_TIMEZONE,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// Read `CINEMA_API_URL`, `CINEMA_TIMEZONE` and `SHOWTIME_WINDOW_DAYS`.
    pub fn from_env() -> Result<Self, ShowtimeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShowtimeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("CINEMA_API_URL").filter(|s| !s.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(tz) = lookup("CINEMA_TIMEZONE").filter(|s| !s.trim().is_empty()) {
            config.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| ShowtimeError::Config(format!("CINEMA_TIMEZONE={}: {}", tz, e)))?;
        }
        if let Some(days) = lookup("SHOWTIME_WINDOW_DAYS").filter(|s| !s.trim().is_empty()) {
            config.window_days = match days.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ShowtimeError::Config(format!(
                        "SHOWTIME_WINDOW_DAYS must be a positive integer, got {}",
                        days
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Wall-clock time at the cinema for a UTC instant.
    pub fn local_now(&self, now_utc: DateTime<Utc>) -> NaiveDateTime {
        now_utc.with_timezone(&self.timezone).naive_local()
    }
}
