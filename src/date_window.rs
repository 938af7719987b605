use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Number of selectable days when nothing else is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 10;

/// One entry of the day picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDay {
    pub offset: u32,
    pub date: NaiveDate,
}

impl WindowDay {
    /// Two-digit day of month, e.g. `01`.
    pub fn day_label(&self) -> String {
        self.date.format("%d").to_string()
    }

    /// Upper-case abbreviated month, e.g. `JUN`.
    pub fn month_label(&self) -> String {
        self.date.format("%b").to_string().to_uppercase()
    }
}

/// Date card as rendered by the booking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCard {
    pub offset: u32,
    pub date: NaiveDate,
    pub day: String,
    pub month: String,
    pub selected: bool,
}

/// `today` followed by the next `days - 1` calendar days.
///
/// The result has exactly `days` entries as long as `today + days - 1` is a date chrono
/// can represent. Closer to [`NaiveDate::MAX`] the window stops at the last
/// representable day instead of wrapping.
pub fn generate(today: NaiveDate, days: u32) -> Vec<WindowDay> {
    (0..days)
        .map_while(|offset| {
            target_date(today, offset).map(|date| WindowDay { offset, date })
        })
        .collect()
}

/// Calendar date `offset` days after `today`.
pub fn target_date(today: NaiveDate, offset: u32) -> Option<NaiveDate> {
    today.checked_add_days(Days::new(u64::from(offset)))
}

/// Build the picker cards, marking the one at `selected_offset`.
pub fn date_cards(today: NaiveDate, days: u32, selected_offset: u32) -> Vec<DateCard> {
    generate(today, days)
        .into_iter()
        .map(|day| DateCard {
            offset: day.offset,
            date: day.date,
            day: day.day_label(),
            month: day.month_label(),
            selected: day.offset == selected_offset,
        })
        .collect()
}
