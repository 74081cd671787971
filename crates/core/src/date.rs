//! Date resolution for the meal page.
//!
//! "Today" is always taken in Asia/Seoul. A request may shift it by one day in either direction
//! or replace it with a date chosen in the picker; the picker always wins when both arrive in the
//! same request.

use crate::constants::SEOUL_UTC_OFFSET_SECS;
use crate::MealError;
use chrono::{Days, FixedOffset, NaiveDate, Offset, Utc};
use std::str::FromStr;

/// Day offset selected with the yesterday/today/tomorrow controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayShift {
    Yesterday,
    Today,
    Tomorrow,
}

impl DayShift {
    /// Applies the shift to `today`.
    ///
    /// Saturates at chrono's date range instead of overflowing.
    pub fn apply(self, today: NaiveDate) -> NaiveDate {
        match self {
            DayShift::Yesterday => today.checked_sub_days(Days::new(1)).unwrap_or(today),
            DayShift::Today => today,
            DayShift::Tomorrow => today.checked_add_days(Days::new(1)).unwrap_or(today),
        }
    }

    /// Query string value for this shift.
    pub fn as_str(self) -> &'static str {
        match self {
            DayShift::Yesterday => "yesterday",
            DayShift::Today => "today",
            DayShift::Tomorrow => "tomorrow",
        }
    }
}

impl FromStr for DayShift {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yesterday" => Ok(DayShift::Yesterday),
            "today" => Ok(DayShift::Today),
            "tomorrow" => Ok(DayShift::Tomorrow),
            other => Err(MealError::InvalidInput(format!("unknown day shift: '{other}'"))),
        }
    }
}

/// Everything a single page request says about which date to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRequest {
    pub shift: Option<DayShift>,
    pub picked: Option<NaiveDate>,
}

/// Asia/Seoul as a fixed offset.
pub fn seoul_offset() -> FixedOffset {
    FixedOffset::east_opt(SEOUL_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current calendar date in Asia/Seoul.
pub fn today_in_seoul() -> NaiveDate {
    Utc::now().with_timezone(&seoul_offset()).date_naive()
}

/// Resolves the date to display.
///
/// The picked date overrides any shift from the same request. A shift is always relative to
/// `today`, never to a previously displayed date. No validation is applied; the minimum
/// selectable date is enforced by the picker control.
pub fn resolve_date(today: NaiveDate, request: &DateRequest) -> NaiveDate {
    let mut current = today;
    if let Some(shift) = request.shift {
        current = shift.apply(today);
    }
    if let Some(picked) = request.picked {
        current = picked;
    }
    current
}

/// Formats a date as the NEIS `MLSV_YMD` key (`yyMMdd`).
pub fn format_api(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Formats a date for display (`yyyy-MM-dd`).
pub fn format_display(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a picker value (`yyyy-MM-dd`). Blank or malformed input yields `None`.
pub fn parse_picked(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
