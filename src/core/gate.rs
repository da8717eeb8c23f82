use super::calendar::HolidayCalendar;
use crate::errors::AppResult;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Whether the automation should run on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    Workday,
    Weekend,
    Holiday,
}

impl DayStatus {
    pub fn is_workday(&self) -> bool {
        matches!(self, DayStatus::Workday)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayStatus::Workday => "workday",
            DayStatus::Weekend => "weekend",
            DayStatus::Holiday => "holiday",
        };
        f.write_str(s)
    }
}

pub struct DayGate;

impl DayGate {
    /// Holidays are checked first, so a missing calendar year is an error
    /// even on a weekend.
    pub fn check(day: NaiveDate, calendar: &dyn HolidayCalendar) -> AppResult<DayStatus> {
        if calendar.is_holiday(day)? {
            return Ok(DayStatus::Holiday);
        }
        match day.weekday() {
            Weekday::Sat | Weekday::Sun => Ok(DayStatus::Weekend),
            _ => Ok(DayStatus::Workday),
        }
    }
}
