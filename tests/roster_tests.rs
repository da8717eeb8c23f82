use chrono::NaiveDate;
use serde_json::json;
use shcw::api::wire::{JobsData, lenient_list};
use shcw::errors::AppError;
use shcw::models::{ClockSide, GpsCoords, Job, Shift, ShiftApplication, ShiftState};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn shift(apply_code: &str, open: &str) -> Shift {
    Shift {
        job_code: "J1".into(),
        apply_code: apply_code.into(),
        unit_code: format!("U-{}", apply_code),
        open_date: day(open),
        clock_in: None,
        clock_out: None,
        state: ShiftState::Approved,
        settled: false,
    }
}

fn job(shifts: Vec<Shift>) -> Job {
    Job {
        code: "J1".into(),
        name: "Library desk".into(),
        shifts,
    }
}

#[test]
fn test_get_shift_finds_exact_day() {
    let j = job(vec![
        shift("A1", "2026-10-18"),
        shift("A2", "2026-10-19"),
        shift("A3", "2026-10-20"),
    ]);

    let found = j.get_shift(day("2026-10-19")).expect("shift");
    assert_eq!(found.apply_code, "A2");
    assert_eq!(j.get_shift_index(day("2026-10-19")), Some(1));
}

#[test]
fn test_get_shift_not_found() {
    let j = job(vec![shift("A1", "2026-10-18")]);
    assert!(j.get_shift(day("2026-10-19")).is_none());
    assert_eq!(j.get_shift_index(day("2026-10-19")), None);
}

#[test]
fn test_get_shift_on_empty_job() {
    let j = job(Vec::new());
    assert!(j.get_shift(day("2026-10-19")).is_none());
}

#[test]
fn test_stamp_prefers_clock_in() {
    let mut s = shift("A1", "2026-10-19");
    let t1 = day("2026-10-19").and_hms_opt(9, 0, 0).unwrap();
    let t2 = day("2026-10-19").and_hms_opt(17, 0, 0).unwrap();

    assert!(s.needs_clock());
    assert_eq!(s.stamp(t1), Some(ClockSide::In));
    assert_eq!(s.clock_in, Some(t1));
    assert_eq!(s.clock_out, None);

    assert_eq!(s.stamp(t2), Some(ClockSide::Out));
    assert_eq!(s.clock_out, Some(t2));

    assert!(!s.needs_clock());
    assert_eq!(s.stamp(t2), None);
}

#[test]
fn test_shift_state_codes() {
    assert_eq!(ShiftState::from_code(10), ShiftState::NotApproved);
    assert_eq!(ShiftState::from_code(20), ShiftState::Approved);
    assert_eq!(ShiftState::from_code(30), ShiftState::Other(30));
    assert_eq!(ShiftState::Approved.code(), 20);
    assert_eq!(ShiftState::Other(30).code(), 30);
}

#[derive(serde::Deserialize)]
struct Wrapper {
    #[serde(deserialize_with = "lenient_list")]
    items: Vec<u32>,
}

#[test]
fn test_lenient_list_accepts_empty_string() {
    let w: Wrapper = serde_json::from_value(json!({ "items": "" })).unwrap();
    assert!(w.items.is_empty());
}

#[test]
fn test_lenient_list_keeps_order() {
    let w: Wrapper = serde_json::from_value(json!({ "items": [3, 1, 2] })).unwrap();
    assert_eq!(w.items, vec![3, 1, 2]);
}

#[test]
fn test_lenient_list_rejects_other_strings() {
    let res: Result<Wrapper, _> = serde_json::from_value(json!({ "items": "oops" }));
    assert!(res.is_err());
}

#[test]
fn test_jobs_data_with_quoted_empty_list() {
    let data: JobsData = serde_json::from_value(json!({
        "records": [{ "pkFirstCode": "J1", "name": "a", "list": "" }]
    }))
    .unwrap();
    assert_eq!(data.records.len(), 1);
    assert!(data.records[0].list.is_empty());
}

#[test]
fn test_application_user_accepts_string_or_number() {
    let a: ShiftApplication = serde_json::from_value(json!({
        "code": "C1", "user": "101", "ticket": "t", "ticketOrder": "o", "nickName": "Bob"
    }))
    .unwrap();
    assert_eq!(a.user_id, 101);
    assert_eq!(a.user_name, "Bob");

    let b: ShiftApplication = serde_json::from_value(json!({
        "code": "C2", "user": 102, "ticket": "t", "ticketOrder": "o"
    }))
    .unwrap();
    assert_eq!(b.user_id, 102);
    assert_eq!(b.user_name, "");
}

#[test]
fn test_gps_parses_longitude_first() {
    let gps: GpsCoords = "121.47, 31.23".parse().unwrap();
    assert_eq!(gps.lng, 121.47);
    assert_eq!(gps.lat, 31.23);
    assert_eq!(gps.to_string(), "121.47,31.23");
}

#[test]
fn test_gps_rejects_malformed_values() {
    for bad in ["121.47", "121.47,31.23,5", "east,31.23", "121.47,"] {
        let res: Result<GpsCoords, _> = bad.parse();
        assert!(matches!(res, Err(AppError::Config(_))), "accepted {:?}", bad);
    }
}
