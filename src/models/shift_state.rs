use serde::{Deserialize, Serialize};

/// Application state of a shift as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ShiftState {
    NotApproved, // 10
    Approved,    // 20
    Other(i32),
}

impl ShiftState {
    pub fn code(&self) -> i32 {
        match self {
            ShiftState::NotApproved => 10,
            ShiftState::Approved => 20,
            ShiftState::Other(c) => *c,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            10 => ShiftState::NotApproved,
            20 => ShiftState::Approved,
            other => ShiftState::Other(other),
        }
    }
}

impl From<i32> for ShiftState {
    fn from(code: i32) -> Self {
        ShiftState::from_code(code)
    }
}

impl From<ShiftState> for i32 {
    fn from(state: ShiftState) -> Self {
        state.code()
    }
}
