use super::shift::Shift;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub code: String,
    pub name: String,
    pub shifts: Vec<Shift>,
}

impl Job {
    /// The shift that opens on `date`, if any.
    pub fn get_shift(&self, date: NaiveDate) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.open_date == date)
    }

    pub fn get_shift_index(&self, date: NaiveDate) -> Option<usize> {
        self.shifts.iter().position(|s| s.open_date == date)
    }
}
