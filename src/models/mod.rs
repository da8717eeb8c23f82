pub mod application;
pub mod gps;
pub mod job;
pub mod shift;
pub mod shift_state;

pub use application::ShiftApplication;
pub use gps::GpsCoords;
pub use job::Job;
pub use shift::{ClockSide, Shift};
pub use shift_state::ShiftState;
