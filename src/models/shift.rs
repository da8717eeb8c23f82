use super::shift_state::ShiftState;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Which side of a shift a clock call recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClockSide {
    In,
    Out,
}

/// One day of work the user holds a ticket for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shift {
    pub job_code: String,          // ⇔ records[].pkFirstCode of the owning job
    pub apply_code: String,        // ⇔ applyCode
    pub unit_code: String,         // ⇔ pk_unit_code
    pub open_date: NaiveDate,      // ⇔ day ("YYYY-MM-DD")
    pub clock_in: Option<NaiveDateTime>,
    pub clock_out: Option<NaiveDateTime>,
    pub state: ShiftState,
    pub settled: bool,
}

impl Shift {
    pub fn needs_clock(&self) -> bool {
        self.clock_in.is_none() || self.clock_out.is_none()
    }

    /// The side a successful clock call is assumed to have recorded.
    /// The service does not say, so clock-in wins whenever it is still unset.
    pub fn pending_side(&self) -> Option<ClockSide> {
        if self.clock_in.is_none() {
            Some(ClockSide::In)
        } else if self.clock_out.is_none() {
            Some(ClockSide::Out)
        } else {
            None
        }
    }

    /// Record a local timestamp for the pending side and return which one it was.
    pub fn stamp(&mut self, at: NaiveDateTime) -> Option<ClockSide> {
        let side = self.pending_side()?;
        match side {
            ClockSide::In => self.clock_in = Some(at),
            ClockSide::Out => self.clock_out = Some(at),
        }
        Some(side)
    }
}
