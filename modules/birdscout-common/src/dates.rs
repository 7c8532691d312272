//! Date-key construction across the two locales the tool bridges.
//!
//! The hobbyist site labels each observation with a Japanese marker line
//! (`2025年8月24日(日)に観察`); the report groups by a Chinese date key
//! (`2025-08-24 (星期日)`). A [`DateWindow`] holds both forms for every day
//! of the sliding window and translates between them.

use chrono::{Datelike, Duration, NaiveDate};

const JP_WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];
const CN_WEEKDAYS: [&str; 7] = [
    "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
];

/// Japanese observation marker exactly as the site prints it. Month and day
/// are unpadded.
pub fn site_marker(d: NaiveDate) -> String {
    let weekday = JP_WEEKDAYS[d.weekday().num_days_from_monday() as usize];
    format!("{}年{}月{}日({})に観察", d.year(), d.month(), d.day(), weekday)
}

/// Report grouping key: ISO date plus the Chinese weekday.
pub fn report_key(d: NaiveDate) -> String {
    let weekday = CN_WEEKDAYS[d.weekday().num_days_from_monday() as usize];
    format!("{} ({})", d.format("%Y-%m-%d"), weekday)
}

/// The sliding window of target dates, most recent first.
#[derive(Debug, Clone)]
pub struct DateWindow {
    days: Vec<(NaiveDate, String, String)>, // (date, site marker, report key)
}

impl DateWindow {
    /// Window covering `num_days` days ending at `today` (inclusive).
    pub fn ending(today: NaiveDate, num_days: u32) -> Self {
        let days = (0..num_days.max(1) as i64)
            .map(|i| {
                let d = today - Duration::days(i);
                (d, site_marker(d), report_key(d))
            })
            .collect();
        Self { days }
    }

    /// Report key for a Japanese site marker line, if the line is one of the
    /// window's markers.
    pub fn key_for_marker(&self, line: &str) -> Option<&str> {
        self.days
            .iter()
            .find(|(_, marker, _)| marker == line)
            .map(|(_, _, key)| key.as_str())
    }

    /// Report key for a calendar date, if the date falls inside the window.
    pub fn key_for_date(&self, date: NaiveDate) -> Option<&str> {
        self.days
            .iter()
            .find(|(d, _, _)| *d == date)
            .map(|(_, _, key)| key.as_str())
    }
}
