use serde_json::json;
use shcw::api::envelope::{Envelope, plain_message};
use shcw::errors::AppError;

#[test]
fn test_plain_message_joins_paragraphs() {
    assert_eq!(plain_message("<p>Line1</p><p>Line2</p>"), "Line1\nLine2");
}

#[test]
fn test_plain_message_keeps_untagged_text() {
    assert_eq!(plain_message("plain text"), "plain text");
    assert_eq!(plain_message(""), "");
}

#[test]
fn test_plain_message_with_attributes() {
    let msg = r#"<p style="color:red">Not allowed</p>"#;
    assert_eq!(plain_message(msg), "Not allowed");
}

#[test]
fn test_envelope_success_returns_data() {
    let env = Envelope::from_value(json!({ "code": 0, "msg": "ok", "data": { "x": 1 } })).unwrap();
    assert_eq!(env.into_data().unwrap(), json!({ "x": 1 }));
}

#[test]
fn test_envelope_success_without_data() {
    let env = Envelope::from_value(json!({ "code": 0 })).unwrap();
    assert!(env.into_data().unwrap().is_null());
}

#[test]
fn test_envelope_failure_is_detagged() {
    let env = Envelope::from_value(json!({ "code": 7, "msg": "<p>Nope</p>", "data": null })).unwrap();
    assert_eq!(env.into_data().unwrap_err(), "Nope");
}

#[test]
fn test_envelope_without_code_is_format_error() {
    let res = Envelope::from_value(json!({ "msg": "hello" }));
    assert!(matches!(res, Err(AppError::Format(_))));
}
