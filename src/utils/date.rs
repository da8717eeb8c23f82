//! Wire date codecs: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and the year-less `MM-DD`.
//!
//! An empty string is the "unset" value on the wire and maps to `None`.
//! All values are naive wall-clock times in the service's local zone.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Any leap year works here, it only has to accept Feb 29.
const MONTH_DAY_PROBE_YEAR: i32 = 2000;

/// A calendar day without a year, used by the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(MONTH_DAY_PROBE_YEAR, month, day)
            .map(|_| Self { month, day })
            .ok_or_else(|| AppError::Format(format!("{:02}-{:02}", month, day)))
    }

    /// Project onto `year`. Feb 29 on a non-leap year does not exist.
    pub fn with_year(&self, year: i32) -> AppResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or_else(|| AppError::Format(format!("{}-{} does not exist in {}", self.month, self.day, year)))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

pub fn encode_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn encode_date_time(dt: Option<NaiveDateTime>) -> String {
    dt.map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn encode_month_day(md: Option<MonthDay>) -> String {
    md.map(|md| md.to_string()).unwrap_or_default()
}

/// chrono accepts single-digit fields and leading blanks, the wire does not:
/// a value only decodes if it re-encodes to exactly the same text.
fn exact<T>(s: &str, value: T, encoded: String, expected: &str) -> AppResult<T> {
    if encoded == s {
        Ok(value)
    } else {
        Err(AppError::Format(format!("expected {}, got '{}'", expected, s)))
    }
}

pub fn decode_date(s: &str) -> AppResult<Option<NaiveDate>> {
    if s.is_empty() {
        return Ok(None);
    }
    let d = NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| AppError::Format(format!("expected YYYY-MM-DD, got '{}'", s)))?;
    exact(s, Some(d), encode_date(Some(d)), "YYYY-MM-DD")
}

pub fn decode_date_time(s: &str) -> AppResult<Option<NaiveDateTime>> {
    if s.is_empty() {
        return Ok(None);
    }
    let dt = NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .map_err(|_| AppError::Format(format!("expected YYYY-MM-DD HH:MM:SS, got '{}'", s)))?;
    exact(s, Some(dt), encode_date_time(Some(dt)), "YYYY-MM-DD HH:MM:SS")
}

pub fn decode_month_day(s: &str) -> AppResult<Option<MonthDay>> {
    if s.is_empty() {
        return Ok(None);
    }
    let probe = format!("{}-{}", MONTH_DAY_PROBE_YEAR, s);
    let d = NaiveDate::parse_from_str(&probe, DATE_FORMAT)
        .map_err(|_| AppError::Format(format!("expected MM-DD, got '{}'", s)))?;
    let md = MonthDay {
        month: d.month(),
        day: d.day(),
    };
    exact(s, Some(md), md.to_string(), "MM-DD")
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    decode_date(s)?.ok_or_else(|| AppError::Format("empty date".into()))
}

macro_rules! serde_codec {
    ($name:ident, $ty:ty, $encode:path, $decode:path) => {
        /// Serde adapter for `Option` fields using the matching wire format.
        pub mod $name {
            use serde::{Deserialize, Deserializer, Serializer};

            pub fn serialize<S: Serializer>(v: &Option<$ty>, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(&$encode(*v))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<$ty>, D::Error> {
                let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
                $decode(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_codec!(serde_date, chrono::NaiveDate, super::encode_date, super::decode_date);
serde_codec!(
    serde_date_time,
    chrono::NaiveDateTime,
    super::encode_date_time,
    super::decode_date_time
);
serde_codec!(
    serde_month_day,
    super::MonthDay,
    super::encode_month_day,
    super::decode_month_day
);
