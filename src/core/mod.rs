pub mod approve;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod gate;
pub mod run;
