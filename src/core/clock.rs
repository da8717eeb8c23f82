use crate::api::{Session, Transport};
use crate::models::{ClockSide, ShiftState};
use crate::utils::time::Clock;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

/// Which clock actions the run is allowed to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ClockMode {
    /// Call whenever either side is still unset.
    #[default]
    Auto,
    /// Only when clock-in is unset.
    In,
    /// Only when clock-out is unset.
    Out,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockReport {
    pub clocked_in: usize,
    pub clocked_out: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct ClockLogic;

impl ClockLogic {
    /// Issue one clock call per job whose shift opens on `today`, is not
    /// waiting for approval and still misses a side.
    ///
    /// The service records the call as in or out on its own and returns
    /// nothing telling which. The side is inferred from the local roster:
    /// clock-in if it was unset, clock-out otherwise, stamped with
    /// `clock.now()` after the call. The roster is not re-fetched, so a call
    /// that succeeded server-side but failed to answer leaves local state
    /// behind until the next run.
    pub fn run<T: Transport>(
        session: &mut Session<T>,
        today: NaiveDate,
        clock: &dyn Clock,
        mode: ClockMode,
    ) -> ClockReport {
        let mut report = ClockReport::default();

        let targets: Vec<(usize, usize)> = session
            .jobs()
            .iter()
            .enumerate()
            .filter_map(|(j, job)| job.get_shift_index(today).map(|s| (j, s)))
            .collect();

        for (j, s) in targets {
            let job = &session.jobs()[j];
            let shift = &job.shifts[s];
            info!("job: {}", job.name);

            if shift.state == ShiftState::NotApproved {
                info!(apply_code = %shift.apply_code, "shift not approved yet, not clocking");
                report.skipped += 1;
                continue;
            }

            let wanted = match mode {
                ClockMode::Auto => shift.needs_clock(),
                ClockMode::In => shift.clock_in.is_none(),
                ClockMode::Out => shift.clock_out.is_none(),
            };
            if !wanted {
                match mode {
                    ClockMode::Out => info!("already clocked out"),
                    ClockMode::In => info!("already clocked in"),
                    ClockMode::Auto => info!("already clocked in and out"),
                }
                report.skipped += 1;
                continue;
            }

            let job_code = job.code.clone();
            if let Err(e) = session.clock(&job_code) {
                warn!(job = %job_code, "{}", e);
                report.failed += 1;
                continue;
            }

            let now = clock.now();
            match session.jobs_mut()[j].shifts[s].stamp(now) {
                Some(ClockSide::In) => {
                    report.clocked_in += 1;
                    info!("clocked in");
                }
                Some(ClockSide::Out) => {
                    report.clocked_out += 1;
                    info!("clocked out");
                }
                None => {}
            }
        }

        report
    }
}
