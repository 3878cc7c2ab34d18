//! Calendar helpers. Inspection records identify their day with a fixed
//! `dd/mm/YYYY` string and lookups compare those strings exactly, so every
//! date entering the system goes through [`canonical_day`] first.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};

pub const DAY_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_day(d: NaiveDate) -> String {
    d.format(DAY_FORMAT).to_string()
}

/// Today's day string as stored in records.
pub fn today_str() -> String {
    format_day(today())
}

pub fn now_time_str() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Parse a day written as `dd/mm/YYYY` (stored form) or `YYYY-MM-DD`.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DAY_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Normalise user or record input to the stored day string.
pub fn canonical_day(s: &str) -> Option<String> {
    parse_day(s).map(format_day)
}

/// Compact `YYYYMMDD` form used in file names.
pub fn file_stamp(day: &str) -> String {
    parse_day(day)
        .map(|d| d.format("%Y%m%d").to_string())
        .unwrap_or_else(|| day.replace('/', ""))
}

/// Day given on the command line, or today when absent.
pub fn resolve_day(input: Option<&str>) -> AppResult<String> {
    match input {
        Some(raw) => canonical_day(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today_str()),
    }
}
