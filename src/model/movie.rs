use serde::{Deserialize, Serialize};

/// Movie metadata as served by the cinema API. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "MovieName")]
    pub name: String,
    #[serde(rename = "MovieDuration", default)]
    pub duration_minutes: u32,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "MovieType", default)]
    pub genre: Option<String>,
    #[serde(rename = "Synopsis", default)]
    pub synopsis: Option<String>,
    #[serde(rename = "Actor", default)]
    pub actors: Option<String>,
    #[serde(rename = "ReleaseDate", default)]
    pub release_date: Option<String>,
    // External score; absent unless the API provides one.
    #[serde(rename = "Rating", default)]
    pub rating: Option<f32>,
}

impl Movie {
    /// Release date as a calendar date. Accepts RFC 3339 timestamps or plain `YYYY-MM-DD`.
    pub fn release_day(&self) -> Option<chrono::NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

/// Non-empty trimmed text, or `None` for blank strings the API sends instead of nulls.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
