//! Typed calls against the scheduling service for one logged-in user.

use super::envelope::{Envelope, decode_data};
use super::transport::Transport;
use super::wire::{
    ApplicationsData, ApplicationsRequest, ApproveRequest, ClockRequest, JobsData, JobsRequest,
    LoginData, LoginRequest, PAGE_SIZE, PATH_APPLICATIONS, PATH_APPROVE, PATH_CLOCK, PATH_JOBS,
    PATH_LOGIN,
};
use crate::errors::{AppError, AppResult};
use crate::models::{GpsCoords, Job, Shift, ShiftApplication, ShiftState};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

const LOGIN_TYPE: &str = "1";
const STATUS_OPEN: i32 = 1;
const ANY_APPLICANT: &str = "0";
const LOCATION_TYPE_GPS: &str = "GPS";
const SOURCE_TYPE: i32 = 1;
const CONFIRM_CHECK: i32 = 0;
const SIGN_PAGE_CODE: i32 = 1;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInfo {
    pub user_id: i64,
    pub token: String,
}

pub struct Session<T: Transport> {
    transport: T,
    credentials: Credentials,
    gps: GpsCoords,
    address: String,

    login: Option<LoginInfo>,
    jobs: Vec<Job>,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, credentials: Credentials, gps: GpsCoords, address: impl Into<String>) -> Self {
        Self {
            transport,
            credentials,
            gps,
            address: address.into(),
            login: None,
            jobs: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// 0 until `login` succeeds.
    pub fn user_id(&self) -> i64 {
        self.login.as_ref().map(|l| l.user_id).unwrap_or_default()
    }

    pub fn token(&self) -> Option<&str> {
        self.login.as_ref().map(|l| l.token.as_str())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn jobs_mut(&mut self) -> &mut [Job] {
        &mut self.jobs
    }

    pub fn login(&mut self) -> AppResult<LoginInfo> {
        let body = LoginRequest {
            login_name: &self.credentials.username,
            login_password: &self.credentials.password,
            login_type: LOGIN_TYPE,
        };

        let data = match self.call(PATH_LOGIN, &body) {
            Err(AppError::Api(msg)) => return Err(AppError::Auth(msg)),
            other => other?,
        };
        let data: LoginData = decode_data(data)?;

        let info = LoginInfo {
            user_id: data.user_id,
            token: data.cookie_resp.token,
        };
        self.login = Some(info.clone());
        Ok(info)
    }

    /// Replace the roster with the user's open shifts.
    pub fn fetch_jobs(&mut self) -> AppResult<&[Job]> {
        self.jobs.clear();

        let body = JobsRequest {
            user: self.user_id(),
            status: STATUS_OPEN,
            page_number: 1,
            page_size: PAGE_SIZE,
        };
        let data: JobsData = decode_data(self.call(PATH_JOBS, &body)?)?;

        for record in data.records {
            let shifts: Vec<Shift> = record
                .list
                .into_iter()
                .filter_map(|s| {
                    let Some(open_date) = s.open_date else {
                        warn!(job = %record.code, apply_code = %s.apply_code, "shift without a day, ignored");
                        return None;
                    };
                    Some(Shift {
                        job_code: record.code.clone(),
                        apply_code: s.apply_code,
                        unit_code: s.unit_code,
                        open_date,
                        clock_in: s.clock_in,
                        clock_out: s.clock_out,
                        state: ShiftState::from_code(s.state),
                        settled: s.settled != 0,
                    })
                })
                .collect();

            if shifts.is_empty() {
                continue;
            }
            self.jobs.push(Job {
                code: record.code,
                name: record.name,
                shifts,
            });
        }

        debug!(jobs = self.jobs.len(), "roster fetched");
        Ok(&self.jobs)
    }

    /// Applications still waiting for approval on a work unit.
    pub fn fetch_applications(&self, unit_code: &str) -> AppResult<Vec<ShiftApplication>> {
        let body = ApplicationsRequest {
            pk_unit_code: unit_code,
            user: ANY_APPLICANT.to_string(),
            state: ShiftState::NotApproved.code(),
            page_number: 1,
            page_size: PAGE_SIZE,
            is_settle: 0,
        };

        let data = self
            .call(PATH_APPLICATIONS, &body)
            .map_err(|e| prefix_error(e, &format!("fetch {}", unit_code)))?;
        let data: ApplicationsData = decode_data(data)?;

        Ok(data
            .records
            .into_iter()
            .map(|mut app| {
                if app.unit_code.is_empty() {
                    app.unit_code = unit_code.to_string();
                }
                app
            })
            .collect())
    }

    pub fn approve(&mut self, app: &ShiftApplication) -> AppResult<()> {
        let body = ApproveRequest {
            application: app,
            state: ShiftState::Approved.code(),
        };
        self.call(PATH_APPROVE, &body)?;

        // our own application: reflect it in the roster
        let me = self.user_id();
        if app.user_id == me
            && let Some(shift) = self
                .jobs
                .iter_mut()
                .flat_map(|j| j.shifts.iter_mut())
                .find(|s| s.apply_code == app.code)
        {
            shift.state = ShiftState::Approved;
        }
        Ok(())
    }

    /// Clock in or out on a job. The service decides which one and does not say.
    pub fn clock(&self, job_code: &str) -> AppResult<()> {
        let user = self.user_id();
        let body = ClockRequest {
            user,
            pk_post_code: job_code,
            location_type: LOCATION_TYPE_GPS,
            source_type: SOURCE_TYPE,
            option_user: user,
            confirm_check: CONFIRM_CHECK,
            sign_page_code: SIGN_PAGE_CODE,
            lat: self.gps.lat,
            lng: self.gps.lng,
            address: &self.address,
        };
        self.call(PATH_CLOCK, &body)?;
        Ok(())
    }

    fn call<B: Serialize>(&self, path: &str, body: &B) -> AppResult<Value> {
        let body = serde_json::to_value(body)?;
        let raw = self.transport.post(path, self.token(), &body)?;
        Envelope::from_value(raw)?
            .into_data()
            .map_err(AppError::Api)
    }
}

fn prefix_error(e: AppError, context: &str) -> AppError {
    match e {
        AppError::Api(msg) => AppError::Api(format!("{}: {}", context, msg)),
        AppError::Transport(msg) => AppError::Transport(format!("{}: {}", context, msg)),
        other => other,
    }
}
