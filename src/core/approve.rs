use crate::api::{Session, Transport};
use chrono::NaiveDate;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalReport {
    pub approved: usize,
    pub failed: usize,
}

/// High-level business logic for approving today's shift applications.
pub struct ApproveLogic;

impl ApproveLogic {
    /// Approve every pending application for shifts opening on `today`.
    /// Failures are logged and skipped, never retried.
    pub fn run<T: Transport>(session: &mut Session<T>, today: NaiveDate) -> ApprovalReport {
        let mut report = ApprovalReport::default();

        // (name, unit code) pairs, so the roster is free to change while we approve
        let targets: Vec<(String, String)> = session
            .jobs()
            .iter()
            .filter_map(|job| {
                job.get_shift(today)
                    .map(|shift| (job.name.clone(), shift.unit_code.clone()))
            })
            .collect();

        for (job_name, unit_code) in targets {
            let apps = match session.fetch_applications(&unit_code) {
                Ok(apps) => apps,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };
            if !apps.is_empty() {
                info!("job: {}", job_name);
            }

            for app in &apps {
                match session.approve(app) {
                    Ok(()) => {
                        report.approved += 1;
                        info!("approved user: {}", app.user_name);
                    }
                    Err(e) => {
                        report.failed += 1;
                        warn!(user = %app.user_name, "{}", e);
                    }
                }
            }
        }

        report
    }
}
