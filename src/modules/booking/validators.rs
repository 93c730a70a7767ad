// Response Validators
//
// Fail-fast schema and invariant checks for booking service responses. The
// async `assert_*` functions read a response and delegate to the synchronous
// `check_*` rules, which return the typed payload on success.

use reqwest::{Response, StatusCode};
use serde_json::{Map, Value};

use super::models::{Booking, BookingIdObject, CreateBookingResponse};
use crate::core::constants::API_DATE_PATTERN;
use crate::core::dates::{matches_api_date_pattern, parse_api_date};
use crate::core::{AppError, Result};
use crate::modules::auth::CreateTokenResponse;

pub struct BookingValidators;

impl BookingValidators {
    // ========================================
    // Field-level rules
    // ========================================

    /// Validate a booking object and return it typed
    pub fn assert_valid_booking_schema(body: &Value) -> Result<Booking> {
        let booking = as_object(body, "booking")?;

        non_empty_string(booking, "firstname")?;
        non_empty_string(booking, "lastname")?;

        let price = required(booking, "totalprice")?;
        let totalprice = price
            .as_f64()
            .ok_or_else(|| type_error("totalprice", "number", price))?;
        if totalprice < 0.0 {
            return Err(AppError::contract(format!(
                "totalprice must be >= 0, got {}",
                totalprice
            )));
        }

        let deposit = required(booking, "depositpaid")?;
        if !deposit.is_boolean() {
            return Err(type_error("depositpaid", "boolean", deposit));
        }

        let dates = as_object(required(booking, "bookingdates")?, "bookingdates")?;
        let checkin = string_field(dates, "checkin")?;
        let checkout = string_field(dates, "checkout")?;
        Self::assert_valid_date_format(checkin)?;
        Self::assert_valid_date_format(checkout)?;

        match (parse_api_date(checkin), parse_api_date(checkout)) {
            (Some(start), Some(end)) if end >= start => {}
            (Some(_), Some(_)) => {
                return Err(AppError::contract(format!(
                    "checkout {} is before checkin {}",
                    checkout, checkin
                )))
            }
            _ => {
                return Err(AppError::contract(format!(
                    "bookingdates are not calendar dates: {} / {}",
                    checkin, checkout
                )))
            }
        }

        if let Some(needs) = booking.get("additionalneeds") {
            if !needs.is_string() {
                return Err(type_error("additionalneeds", "string", needs));
            }
        }

        Ok(serde_json::from_value(body.clone())?)
    }

    /// `CCYY-MM-DD`: four digits, two digits, two digits
    pub fn assert_valid_date_format(date: &str) -> Result<()> {
        if matches_api_date_pattern(date) {
            Ok(())
        } else {
            Err(AppError::contract(format!(
                "date '{}' does not match {}",
                date, API_DATE_PATTERN
            )))
        }
    }

    // ========================================
    // Body rules (status + body already read)
    // ========================================

    pub fn check_status(actual: StatusCode, expected: StatusCode, body: &str) -> Result<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(AppError::unexpected_status(expected, actual, body))
        }
    }

    pub fn check_create_booking_response(
        status: StatusCode,
        body: &Value,
    ) -> Result<CreateBookingResponse> {
        Self::check_status(status, StatusCode::OK, &body.to_string())?;
        let object = as_object(body, "create booking response")?;

        let bookingid = positive_id(required(object, "bookingid")?)?;
        let booking = Self::assert_valid_booking_schema(required(object, "booking")?)?;

        Ok(CreateBookingResponse { bookingid, booking })
    }

    pub fn check_get_booking_response(status: StatusCode, body: &Value) -> Result<Booking> {
        Self::check_status(status, StatusCode::OK, &body.to_string())?;
        Self::assert_valid_booking_schema(body)
    }

    pub fn check_update_booking_response(status: StatusCode, body: &Value) -> Result<Booking> {
        Self::check_status(status, StatusCode::OK, &body.to_string())?;
        Self::assert_valid_booking_schema(body)
    }

    pub fn check_get_booking_ids_response(
        status: StatusCode,
        body: &Value,
    ) -> Result<Vec<BookingIdObject>> {
        Self::check_status(status, StatusCode::OK, &body.to_string())?;
        let items = body
            .as_array()
            .ok_or_else(|| type_error("booking ids", "array", body))?;

        items
            .iter()
            .map(|item| {
                let object = as_object(item, "booking id item")?;
                let bookingid = positive_id(required(object, "bookingid")?)?;
                Ok(BookingIdObject { bookingid })
            })
            .collect()
    }

    pub fn check_create_token_response(
        status: StatusCode,
        body: &Value,
    ) -> Result<CreateTokenResponse> {
        Self::check_status(status, StatusCode::OK, &body.to_string())?;
        let object = as_object(body, "token response")?;
        let token = non_empty_string(object, "token")?;

        Ok(CreateTokenResponse {
            token: token.to_string(),
        })
    }

    // ========================================
    // Response gates
    // ========================================

    pub async fn assert_valid_create_booking_response_schema(
        response: Response,
    ) -> Result<CreateBookingResponse> {
        let (status, body) = read_json(response, StatusCode::OK).await?;
        Self::check_create_booking_response(status, &body)
    }

    pub async fn assert_valid_get_booking_response_schema(response: Response) -> Result<Booking> {
        let (status, body) = read_json(response, StatusCode::OK).await?;
        Self::check_get_booking_response(status, &body)
    }

    pub async fn assert_valid_update_booking_response_schema(
        response: Response,
    ) -> Result<Booking> {
        let (status, body) = read_json(response, StatusCode::OK).await?;
        Self::check_update_booking_response(status, &body)
    }

    pub async fn assert_valid_get_booking_ids_response_schema(
        response: Response,
    ) -> Result<Vec<BookingIdObject>> {
        let (status, body) = read_json(response, StatusCode::OK).await?;
        Self::check_get_booking_ids_response(status, &body)
    }

    pub async fn assert_valid_create_token_response_schema(
        response: Response,
    ) -> Result<CreateTokenResponse> {
        let (status, body) = read_json(response, StatusCode::OK).await?;
        Self::check_create_token_response(status, &body)
    }

    /// Status-only gate; returns the body text for further inspection
    pub async fn assert_status(response: Response, expected: StatusCode) -> Result<String> {
        let status = response.status();
        let text = response.text().await?;
        Self::check_status(status, expected, &text)?;
        Ok(text)
    }
}

/// Status is checked before the body is parsed so a wrong status reports the raw text
async fn read_json(response: Response, expected: StatusCode) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let text = response.text().await?;
    BookingValidators::check_status(status, expected, &text)?;
    let body = serde_json::from_str(&text)
        .map_err(|e| AppError::contract(format!("body is not JSON ({}): {}", e, text)))?;
    Ok((status, body))
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| type_error(what, "object", value))
}

fn required<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a Value> {
    object
        .get(field)
        .ok_or_else(|| AppError::contract(format!("missing field '{}'", field)))
}

fn string_field<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str> {
    let value = required(object, field)?;
    value
        .as_str()
        .ok_or_else(|| type_error(field, "string", value))
}

fn non_empty_string<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str> {
    let value = string_field(object, field)?;
    if value.is_empty() {
        return Err(AppError::contract(format!("{} must not be empty", field)));
    }
    Ok(value)
}

fn positive_id(value: &Value) -> Result<i64> {
    let id = value
        .as_i64()
        .ok_or_else(|| type_error("bookingid", "integer", value))?;
    if id <= 0 {
        return Err(AppError::contract(format!("bookingid must be > 0, got {}", id)));
    }
    Ok(id)
}

fn type_error(field: &str, expected: &str, actual: &Value) -> AppError {
    AppError::contract(format!("{} must be {}, got {}", field, expected, actual))
}
