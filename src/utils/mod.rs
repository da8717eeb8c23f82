pub mod date;
pub mod path;
pub mod time;

pub use date::MonthDay;
pub use time::{Clock, ZonedClock};
