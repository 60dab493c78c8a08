//! Calendar dates and their `YYYY.MM.DD` text form.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

/// A wall-clock day with no time of day.
///
/// Years are limited to 0000..=9999 so the text form is always four digits
/// wide and parses back to the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN_YEAR: i32 = 0;
    pub const MAX_YEAR: i32 = 9999;

    /// `month` and `day` are 1-based. Returns `None` for days that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        if (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            Some(Self(date))
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Human label used for the day button's accessible name, e.g. `June 15, 2024`.
    pub fn long_label(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}.{:02}.{:02}", self.year(), self.month(), self.day())
    }
}

/// Render `date` as `YYYY.MM.DD`; an absent date renders as empty text.
pub fn format(date: Option<CalendarDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// Parse strict `YYYY.MM.DD` text.
///
/// Surrounding whitespace is ignored. The year must be four digits; month
/// and day take one or two digits. A day that does not exist in the month
/// (such as `2024.02.30`) is rejected rather than rolled into the next month.
pub fn parse(text: &str) -> Option<CalendarDate> {
    let mut parts = text.trim().split('.');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    if year.len() != 4 || !is_digits(year) {
        return None;
    }
    if !(1..=2).contains(&month.len()) || !is_digits(month) {
        return None;
    }
    if !(1..=2).contains(&day.len()) || !is_digits(day) {
        return None;
    }

    CalendarDate::from_ymd(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Truncate a timestamp to its calendar day.
pub fn normalize(datetime: NaiveDateTime) -> Option<CalendarDate> {
    CalendarDate::from_naive(datetime.date())
}

/// Truncate a zoned timestamp to its local calendar day.
pub fn normalize_zoned<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Option<CalendarDate> {
    normalize(datetime.naive_local())
}

/// `start ~ end`, with single spaces around the separator.
pub fn format_range(start: CalendarDate, end: CalendarDate, separator: char) -> String {
    format!("{start} {separator} {end}")
}

/// Split range text on `separator` and parse each side on its own.
///
/// Either side may be absent or malformed; that side is then `None`.
/// Text after a second separator is ignored.
pub fn split_range(text: &str, separator: char) -> (Option<CalendarDate>, Option<CalendarDate>) {
    let mut sides = text.split(separator).map(str::trim);
    let start = sides.next().and_then(parse);
    let end = sides.next().and_then(parse);
    (start, end)
}

fn is_digits(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit())
}
