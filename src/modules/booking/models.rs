use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::dates::{format_api_date, parse_api_date};

/// Stay window; both dates travel as `CCYY-MM-DD` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

impl BookingDates {
    pub fn new(checkin: impl Into<String>, checkout: impl Into<String>) -> Self {
        Self {
            checkin: checkin.into(),
            checkout: checkout.into(),
        }
    }

    pub fn from_dates(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self {
            checkin: format_api_date(checkin),
            checkout: format_api_date(checkout),
        }
    }

    /// Parsed `(checkin, checkout)`, or `None` if either string is malformed
    pub fn parsed(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_api_date(&self.checkin)?, parse_api_date(&self.checkout)?))
    }

    /// Checkout on or after checkin; malformed dates are never ordered
    pub fn is_ordered(&self) -> bool {
        self.parsed()
            .map(|(checkin, checkout)| checkout >= checkin)
            .unwrap_or(false)
    }
}

/// Reservation record as the booking service stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: f64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl Booking {
    /// JSON body as sent on the wire; the starting point for corrupted payloads
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "firstname": self.firstname,
            "lastname": self.lastname,
            "totalprice": self.totalprice,
            "depositpaid": self.depositpaid,
            "bookingdates": {
                "checkin": self.bookingdates.checkin,
                "checkout": self.bookingdates.checkout,
            },
        });
        if let Some(needs) = &self.additionalneeds {
            body["additionalneeds"] = json!(needs);
        }
        body
    }

    /// Fields the service must echo back unchanged
    pub fn same_contents(&self, other: &Booking) -> bool {
        self.firstname == other.firstname
            && self.lastname == other.lastname
            && self.totalprice == other.totalprice
            && self.depositpaid == other.depositpaid
            && self.bookingdates == other.bookingdates
    }
}

/// Body of a successful `POST /booking`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub bookingid: i64,
    pub booking: Booking,
}

/// Item of `GET /booking`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingIdObject {
    pub bookingid: i64,
}

/// Query filters for `GET /booking`; only present fields become parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingIdsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<String>,
}

impl BookingIdsFilter {
    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn checkin(mut self, checkin: impl Into<String>) -> Self {
        self.checkin = Some(checkin.into());
        self
    }

    pub fn checkout(mut self, checkout: impl Into<String>) -> Self {
        self.checkout = Some(checkout.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.checkin.is_none()
            && self.checkout.is_none()
    }
}
