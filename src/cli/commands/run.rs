use crate::api::{Credentials, HttpTransport, Session};
use crate::cli::parser::{Action, Commands};
use crate::config::Config;
use crate::core::calendar::JsonCalendar;
use crate::core::clock::ClockMode;
use crate::core::run::RunLogic;
use crate::errors::{AppError, AppResult};
use crate::logging;
use crate::models::GpsCoords;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date;
use crate::utils::path::{expand_tilde, optional_path};
use crate::utils::time::{Clock, ZonedClock};
use std::io::{self, BufRead};
use tracing::error;

/// Settings for one run, CLI flags merged over the config file.
struct RunSettings {
    username: String,
    gps: GpsCoords,
    address: String,
    holidays: String,
    mode: ClockMode,
    date: Option<String>,
}

/// Handle the `run` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        username,
        gps,
        address,
        holidays,
        log,
        action,
        date,
    } = cmd
    {
        let log_file = optional_path(log.as_deref().unwrap_or(&cfg.log_file));
        logging::init(log_file.as_deref())?;

        let result = resolve(cfg, username, gps, address, holidays, *action, date)
            .and_then(|settings| execute(cfg, settings));
        if let Err(e) = &result {
            error!("{}", e);
        }
        result?;
    }

    Ok(())
}

fn resolve(
    cfg: &Config,
    username: &Option<String>,
    gps: &Option<String>,
    address: &Option<String>,
    holidays: &Option<String>,
    action: Option<Action>,
    date: &Option<String>,
) -> AppResult<RunSettings> {
    let username = username.clone().unwrap_or_else(|| cfg.username.clone());
    if username.trim().is_empty() {
        return Err(AppError::Config("username not specified".into()));
    }

    let gps_raw = gps.clone().unwrap_or_else(|| cfg.gps.clone());
    if gps_raw.trim().is_empty() {
        return Err(AppError::Config("gps position not specified".into()));
    }

    Ok(RunSettings {
        username,
        gps: gps_raw.parse()?,
        address: address.clone().unwrap_or_else(|| cfg.address.clone()),
        holidays: holidays.clone().unwrap_or_else(|| cfg.holidays.clone()),
        mode: action.map(ClockMode::from).unwrap_or_default(),
        date: date.clone(),
    })
}

fn execute(cfg: &Config, settings: RunSettings) -> AppResult<()> {
    let clock = ZonedClock::from_name(&cfg.timezone)?;
    let today = match &settings.date {
        Some(d) => parse_date(d)?,
        None => clock.today(),
    };

    // do nothing on holidays and weekends, before any network activity
    let calendar = JsonCalendar::load(&expand_tilde(&settings.holidays))?;
    let status = RunLogic::gate(today, &calendar)?;
    if !status.is_workday() {
        info(format!("Today is a {}, nothing to do", status));
        return Ok(());
    }

    let password = read_password()?;
    let transport = HttpTransport::new(&cfg.base_url, cfg.timeout())?;
    let mut session = Session::new(
        transport,
        Credentials {
            username: settings.username,
            password,
        },
        settings.gps,
        settings.address,
    );

    let report = RunLogic::execute(&mut session, today, &clock, settings.mode)?;
    let (approvals, clocks) = (report.approvals, report.clocks);

    success(format!("Approved {} application(s)", approvals.approved));
    success(format!(
        "Clocked in {} / clocked out {} job(s)",
        clocks.clocked_in, clocks.clocked_out
    ));
    if approvals.failed + clocks.failed > 0 {
        warning(format!(
            "{} approval(s) and {} clock call(s) failed, see the log",
            approvals.failed, clocks.failed
        ));
    }
    Ok(())
}

/// One line from stdin, without the line terminator.
fn read_password() -> AppResult<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| AppError::Config(format!("failed to read password: {}", e)))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
