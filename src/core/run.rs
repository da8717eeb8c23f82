use super::approve::{ApprovalReport, ApproveLogic};
use super::calendar::HolidayCalendar;
use super::clock::{ClockLogic, ClockMode, ClockReport};
use super::gate::{DayGate, DayStatus};
use crate::api::{Session, Transport};
use crate::errors::AppResult;
use crate::utils::time::Clock;
use chrono::NaiveDate;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub approvals: ApprovalReport,
    pub clocks: ClockReport,
}

/// The day's sequence: gate, login, roster, approvals, clock.
pub struct RunLogic;

impl RunLogic {
    /// Is `today` a day to work on? Logs the reason when it is not.
    pub fn gate(today: NaiveDate, calendar: &dyn HolidayCalendar) -> AppResult<DayStatus> {
        let status = DayGate::check(today, calendar)?;
        if !status.is_workday() {
            info!("today is {}", status);
        }
        Ok(status)
    }

    /// Login and roster failures abort the run; everything after that is
    /// handled per item.
    pub fn execute<T: Transport>(
        session: &mut Session<T>,
        today: NaiveDate,
        clock: &dyn Clock,
        mode: ClockMode,
    ) -> AppResult<RunReport> {
        let login = session.login()?;
        info!(user_id = login.user_id, "user {} has logged in", session.username());

        let jobs = session.fetch_jobs()?;
        info!("{} job(s) with open shifts", jobs.len());

        let approvals = ApproveLogic::run(session, today);
        let clocks = ClockLogic::run(session, today, clock, mode);

        Ok(RunReport { approvals, clocks })
    }
}
