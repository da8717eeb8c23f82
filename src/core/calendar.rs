//! Public holiday table loaded from a JSON file.
//!
//! ```json
//! [
//!   { "year": 2023, "dates": [ { "begin": "01-01", "end": "01-02" } ] }
//! ]
//! ```

use crate::errors::{AppError, AppResult};
use crate::utils::date::{MonthDay, serde_month_day};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub trait HolidayCalendar {
    /// Fails when the calendar has no data for the date's year.
    fn is_holiday(&self, date: NaiveDate) -> AppResult<bool>;
}

#[derive(Debug, Deserialize)]
struct YearEntry {
    year: i32,
    #[serde(default)]
    dates: Vec<RangeEntry>,
}

#[derive(Debug, Deserialize)]
struct RangeEntry {
    #[serde(with = "serde_month_day")]
    begin: Option<MonthDay>,
    #[serde(with = "serde_month_day")]
    end: Option<MonthDay>,
}

#[derive(Debug, Default)]
pub struct JsonCalendar {
    holidays: HashMap<i32, HashSet<NaiveDate>>,
}

impl JsonCalendar {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read holidays file {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.holidays.keys().copied().collect();
        years.sort_unstable();
        years
    }

    fn add_range(dates: &mut HashSet<NaiveDate>, year: i32, range: &RangeEntry) -> AppResult<()> {
        let (Some(begin), Some(end)) = (range.begin, range.end) else {
            return Err(AppError::Config(format!(
                "year {}: holiday range needs both begin and end",
                year
            )));
        };

        let mut day = begin.with_year(year)?;
        let last = end.with_year(year)?;
        if day > last {
            return Err(AppError::Config(format!("year {}, range {}-{}", year, begin, end)));
        }

        while day <= last {
            dates.insert(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Ok(())
    }
}

impl FromStr for JsonCalendar {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let entries: Vec<YearEntry> = serde_json::from_str(s)
            .map_err(|e| AppError::Config(format!("invalid holidays file: {}", e)))?;

        let mut cal = JsonCalendar::default();
        for entry in entries {
            let dates = cal.holidays.entry(entry.year).or_default();
            for range in &entry.dates {
                Self::add_range(dates, entry.year, range)?;
            }
        }
        Ok(cal)
    }
}

impl HolidayCalendar for JsonCalendar {
    fn is_holiday(&self, date: NaiveDate) -> AppResult<bool> {
        let holidays = self.holidays.get(&date.year()).ok_or_else(|| {
            let known: Vec<String> = self.years().iter().map(i32::to_string).collect();
            AppError::Config(format!(
                "no holiday records for year {} (file covers: {})",
                date.year(),
                known.join(", ")
            ))
        })?;
        Ok(holidays.contains(&date))
    }
}
