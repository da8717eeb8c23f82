//! Request and response payloads as the service spells them.

use crate::models::ShiftApplication;
use crate::utils::date::{serde_date, serde_date_time};
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PATH_LOGIN: &str = "/user/accountlogin";
pub const PATH_JOBS: &str = "/station/userTicket/queryPersonalPostByUserAndStatus";
pub const PATH_APPLICATIONS: &str = "/station/postApply/auditList";
pub const PATH_APPROVE: &str = "/station/postApply/audit";
pub const PATH_CLOCK: &str = "/station/newPostSign";

/// Shifts are open at most a month ahead, so one page of 31 covers everything.
pub const PAGE_SIZE: u32 = 31;

/// The server sometimes encodes an empty list as `""` instead of `[]`.
pub fn lenient_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(d)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        v @ Value::Array(_) => serde_json::from_value(v).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected a list or \"\", got {}",
            other
        ))),
    }
}

// ---------------------------
// login
// ---------------------------
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub login_name: &'a str,
    pub login_password: &'a str,
    pub login_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user_id: i64,
    pub cookie_resp: CookieResp,
}

#[derive(Debug, Deserialize)]
pub struct CookieResp {
    pub token: String,
}

// ---------------------------
// roster
// ---------------------------
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsRequest {
    pub user: i64,
    pub status: i32,
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct JobsData {
    #[serde(default, deserialize_with = "lenient_list")]
    pub records: Vec<JobRecord>,
}

#[derive(Debug, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "pkFirstCode")]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub list: Vec<ShiftRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ShiftRecord {
    #[serde(rename = "applyCode", default)]
    pub apply_code: String,
    #[serde(rename = "pk_unit_code", default)]
    pub unit_code: String,
    #[serde(rename = "day", with = "serde_date", default)]
    pub open_date: Option<NaiveDate>,
    #[serde(rename = "checkInTime", with = "serde_date_time", default)]
    pub clock_in: Option<NaiveDateTime>,
    #[serde(rename = "checkOutTime", with = "serde_date_time", default)]
    pub clock_out: Option<NaiveDateTime>,
    #[serde(default)]
    pub state: i32,
    #[serde(rename = "isSettle", default)]
    pub settled: i32,
}

// ---------------------------
// applications
// ---------------------------
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsRequest<'a> {
    pub pk_unit_code: &'a str,
    /// Applicant filter, `"0"` means anyone.
    pub user: String,
    pub state: i32,
    pub page_number: u32,
    pub page_size: u32,
    pub is_settle: i32,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationsData {
    #[serde(default, deserialize_with = "lenient_list")]
    pub records: Vec<ShiftApplication>,
}

#[derive(Debug, Serialize)]
pub struct ApproveRequest<'a> {
    #[serde(flatten)]
    pub application: &'a ShiftApplication,
    pub state: i32,
}

// ---------------------------
// clock
// ---------------------------
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRequest<'a> {
    pub user: i64,
    pub pk_post_code: &'a str,
    pub location_type: &'a str,
    pub source_type: i32,
    pub option_user: i64,
    pub confirm_check: i32,
    pub sign_page_code: i32,
    pub lat: f32,
    pub lng: f32,
    pub address: &'a str,
}
