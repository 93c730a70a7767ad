// Unit tests for the response validators
//
// Exercises the body-level rules against canned payloads shaped like the
// booking service's answers, so they run without network access.

use booker_contract::booking::BookingValidators;
use booker_contract::core::AppError;
use proptest::prelude::*;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn booking() -> Value {
    json!({
        "firstname": "Sally",
        "lastname": "Brown",
        "totalprice": 111,
        "depositpaid": true,
        "bookingdates": {
            "checkin": "2013-02-23",
            "checkout": "2014-10-23"
        },
        "additionalneeds": "Breakfast"
    })
}

#[test]
fn test_create_booking_response() {
    let body = json!({ "bookingid": 1, "booking": booking() });

    let created = BookingValidators::check_create_booking_response(StatusCode::OK, &body).unwrap();
    assert_eq!(created.bookingid, 1);
    assert_eq!(created.booking.firstname, "Sally");
    assert_eq!(created.booking.additionalneeds.as_deref(), Some("Breakfast"));
}

#[test]
fn test_create_booking_response_rejects_zero_id() {
    let body = json!({ "bookingid": 0, "booking": booking() });
    let err = BookingValidators::check_create_booking_response(StatusCode::OK, &body).unwrap_err();
    assert!(matches!(err, AppError::Contract(msg) if msg.contains("bookingid")));
}

#[test]
fn test_wrong_status_reports_expected_and_actual() {
    let err = BookingValidators::check_get_booking_response(StatusCode::NOT_FOUND, &json!("Not Found"))
        .unwrap_err();
    match err {
        AppError::UnexpectedStatus { expected, actual, .. } => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 404);
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[test]
fn test_booking_without_additionalneeds_is_valid() {
    let mut body = booking();
    body.as_object_mut().unwrap().remove("additionalneeds");

    let parsed = BookingValidators::check_get_booking_response(StatusCode::OK, &body).unwrap();
    assert!(parsed.additionalneeds.is_none());
}

#[test]
fn test_missing_required_fields_are_named() {
    for field in ["firstname", "lastname", "totalprice", "depositpaid", "bookingdates"] {
        let mut body = booking();
        body.as_object_mut().unwrap().remove(field);

        let err = BookingValidators::assert_valid_booking_schema(&body).unwrap_err();
        assert!(
            err.to_string().contains(field),
            "error for missing {} should name it: {}",
            field,
            err
        );
    }
}

#[test]
fn test_type_mismatches_are_rejected() {
    let cases = [
        ("totalprice", json!("111")),
        ("depositpaid", json!("true")),
        ("firstname", json!(42)),
        ("additionalneeds", json!(["Breakfast"])),
    ];
    for (field, value) in cases {
        let mut body = booking();
        body[field] = value;
        assert!(
            BookingValidators::assert_valid_booking_schema(&body).is_err(),
            "{} with wrong type should fail",
            field
        );
    }
}

#[test]
fn test_checkout_before_checkin_is_rejected() {
    let mut body = booking();
    body["bookingdates"] = json!({ "checkin": "2025-06-10", "checkout": "2025-06-01" });
    assert!(BookingValidators::assert_valid_booking_schema(&body).is_err());
}

#[test]
fn test_same_day_stay_is_valid() {
    let mut body = booking();
    body["bookingdates"] = json!({ "checkin": "2025-06-10", "checkout": "2025-06-10" });
    assert!(BookingValidators::assert_valid_booking_schema(&body).is_ok());
}

#[test]
fn test_booking_ids_response() {
    let body = json!([{ "bookingid": 1 }, { "bookingid": 7 }]);
    let ids = BookingValidators::check_get_booking_ids_response(StatusCode::OK, &body).unwrap();
    assert_eq!(ids.iter().map(|i| i.bookingid).collect::<Vec<_>>(), vec![1, 7]);

    let empty = BookingValidators::check_get_booking_ids_response(StatusCode::OK, &json!([])).unwrap();
    assert!(empty.is_empty());

    assert!(
        BookingValidators::check_get_booking_ids_response(StatusCode::OK, &json!({ "bookingid": 1 }))
            .is_err()
    );
}

#[test]
fn test_token_response() {
    let token = BookingValidators::check_create_token_response(
        StatusCode::OK,
        &json!({ "token": "abc123def456" }),
    )
    .unwrap();
    assert_eq!(token.token, "abc123def456");

    let refused = BookingValidators::check_create_token_response(
        StatusCode::OK,
        &json!({ "reason": "Bad credentials" }),
    );
    assert!(refused.is_err());
}

proptest! {
    /// Property: any real calendar date in wire format is accepted
    #[test]
    fn prop_calendar_dates_accepted(year in 1000i32..=9999, month in 1u32..=12, day in 1u32..=28) {
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        prop_assert!(BookingValidators::assert_valid_date_format(&date).is_ok());
    }

    /// Property: day-first and slash-separated dates are rejected
    #[test]
    fn prop_other_layouts_rejected(year in 1000i32..=9999, month in 1u32..=12, day in 1u32..=28) {
        let day_first = format!("{:02}-{:02}-{:04}", day, month, year);
        let slashed = format!("{:04}/{:02}/{:02}", year, month, day);
        prop_assert!(BookingValidators::assert_valid_date_format(&day_first).is_err());
        prop_assert!(BookingValidators::assert_valid_date_format(&slashed).is_err());
    }

    /// Property: non-negative prices pass, negative ones fail
    #[test]
    fn prop_price_sign(price in -100_000i64..100_000i64) {
        let mut body = booking();
        body["totalprice"] = json!(price);
        let result = BookingValidators::assert_valid_booking_schema(&body);
        prop_assert_eq!(result.is_ok(), price >= 0);
    }
}
