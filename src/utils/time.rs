//! Wall-clock source pinned to the service's time zone.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

pub trait Clock {
    /// Current local wall-clock time, seconds precision.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock and shifts it into a fixed IANA zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn from_name(name: &str) -> AppResult<Self> {
        let tz = name
            .parse::<Tz>()
            .map_err(|_| AppError::Config(format!("unknown time zone '{}'", name)))?;
        Ok(Self::new(tz))
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> NaiveDateTime {
        let now = Utc::now().with_timezone(&self.tz).naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
