use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// A pending request by some user to take a shift.
/// Only lives between the `auditList` fetch and the `audit` call.
/// `user` is a numeric id the service sends and expects as a string.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftApplication {
    #[serde(rename = "pkUnitCode", default)]
    pub unit_code: String,
    #[serde(default)]
    pub code: String,
    #[serde(rename = "user")]
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub user_id: i64,
    #[serde(rename = "nickName", default, skip_serializing)]
    pub user_name: String,
    pub ticket: String,
    #[serde(rename = "ticketOrder")]
    pub ticket_order: String,
}
