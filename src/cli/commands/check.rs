use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::JsonCalendar;
use crate::core::gate::DayGate;
use crate::errors::AppResult;
use crate::utils::date::{encode_date, parse_date};
use crate::utils::path::expand_tilde;
use crate::utils::time::{Clock, ZonedClock};

/// Handle the `check` command: print the day gate verdict, no network.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { date, holidays } = cmd {
        let day = match date {
            Some(d) => parse_date(d)?,
            None => ZonedClock::from_name(&cfg.timezone)?.today(),
        };
        let path = expand_tilde(holidays.as_deref().unwrap_or(&cfg.holidays));
        let calendar = JsonCalendar::load(&path)?;

        let status = DayGate::check(day, &calendar)?;
        println!("{} is a {}", encode_date(Some(day)), status);
    }

    Ok(())
}
