#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Value, json};
use shcw::api::{Credentials, Session, Transport};
use shcw::errors::{AppError, AppResult};
use shcw::models::GpsCoords;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn shcw() -> Command {
    cargo_bin_cmd!("shcw")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shcw.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a holidays file with the given JSON content, return its path
pub fn write_holidays(name: &str, content: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, content).expect("write holidays");
    p
}

pub const HOLIDAYS_2026: &str = r#"[
    { "year": 2026, "dates": [ { "begin": "01-01", "end": "01-03" }, { "begin": "10-01", "end": "10-08" } ] }
]"#;

#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub token: Option<String>,
    pub body: Value,
}

/// In-memory transport: canned responses per path, every call recorded.
/// The last queued response for a path is reused once the queue runs dry.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, String>>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, response: Value) -> &Self {
        self.responses
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(Ok(response));
        self
    }

    /// Queue a transport-level failure (e.g. HTTP 500).
    pub fn fail(&self, path: &str, msg: &str) -> &Self {
        self.responses
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(Err(msg.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.path == path)
            .cloned()
            .collect()
    }
}

impl Transport for MockTransport {
    fn post(&self, path: &str, token: Option<&str>, body: &Value) -> AppResult<Value> {
        self.calls.borrow_mut().push(Call {
            path: path.to_string(),
            token: token.map(str::to_string),
            body: body.clone(),
        });

        let mut responses = self.responses.borrow_mut();
        let queue = responses
            .get_mut(path)
            .ok_or_else(|| AppError::Transport(format!("no response for {}", path)))?;
        let next = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        match next {
            Some(Ok(v)) => Ok(v),
            Some(Err(msg)) => Err(AppError::Transport(msg)),
            None => Err(AppError::Transport(format!("no response for {}", path))),
        }
    }
}

pub fn ok(data: Value) -> Value {
    json!({ "code": 0, "msg": "success", "data": data })
}

pub fn err(code: i64, msg: &str) -> Value {
    json!({ "code": code, "msg": msg, "data": null })
}

pub fn login_ok(user_id: i64, token: &str) -> Value {
    ok(json!({ "userId": user_id, "cookieResp": { "token": token } }))
}

pub fn gps() -> GpsCoords {
    GpsCoords {
        lat: 31.23,
        lng: 121.47,
    }
}

pub fn session(transport: &MockTransport) -> Session<&MockTransport> {
    Session::new(
        transport,
        Credentials {
            username: "alice".into(),
            password: "secret".into(),
        },
        gps(),
        "People's Square",
    )
}

/// One shift record as the roster endpoint returns it.
pub fn shift_record(apply_code: &str, unit_code: &str, day: &str, check_in: &str, check_out: &str) -> Value {
    json!({
        "applyCode": apply_code,
        "pk_unit_code": unit_code,
        "day": day,
        "checkInTime": check_in,
        "checkOutTime": check_out,
        "state": 20,
        "isSettle": 0
    })
}

pub fn roster(records: Value) -> Value {
    ok(json!({ "records": records }))
}
