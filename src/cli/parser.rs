use crate::core::clock::ClockMode;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for shcw
/// CLI application to clock in/out and approve shift applications
#[derive(Parser)]
#[command(
    name = "shcw",
    version = env!("CARGO_PKG_VERSION"),
    about = "Automate daily clock-in/clock-out and shift application approval",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Clockin,
    Clockout,
}

impl From<Action> for ClockMode {
    fn from(a: Action) -> Self {
        match a {
            Action::Clockin => ClockMode::In,
            Action::Clockout => ClockMode::Out,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Approve today's applications and clock in/out (password is read from stdin)
    Run {
        #[arg(long, help = "Login name")]
        username: Option<String>,

        #[arg(long, value_name = "LNG,LAT", help = "GPS position for clocking, e.g. 121.47,31.23")]
        gps: Option<String>,

        #[arg(long, help = "Name for the GPS position")]
        address: Option<String>,

        #[arg(long, value_name = "FILE", help = "Path to the holidays JSON file")]
        holidays: Option<String>,

        #[arg(long, value_name = "FILE", help = "Path to the log file (appended)")]
        log: Option<String>,

        #[arg(
            long,
            value_enum,
            help = "Only clock in or only clock out (default: whichever is missing)"
        )]
        action: Option<Action>,

        /// Pretend today is the given day (YYYY-MM-DD)
        #[arg(long = "date", hide = true)]
        date: Option<String>,
    },

    /// Tell whether a day is a workday, weekend or holiday
    Check {
        #[arg(long, help = "Day to check (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, value_name = "FILE", help = "Path to the holidays JSON file")]
        holidays: Option<String>,
    },
}
