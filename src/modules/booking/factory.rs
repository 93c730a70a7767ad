// Test Data Factory
//
// Generates randomized, schema-valid booking payloads. Every generated value
// respects the booking invariants unless an override or one of the
// deliberately-invalid generators says otherwise.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use uuid::Uuid;

use super::models::{Booking, BookingDates};
use crate::core::constants::{
    ADDITIONAL_NEEDS, CHECKIN_WINDOW_DAYS, FIRST_NAMES, FUTURE_WINDOW_DAYS,
    INVERTED_STAY_WINDOW_DAYS, LAST_NAMES, PAST_STAY_WINDOW_DAYS, PAST_WINDOW_DAYS, PRICE_MAX,
    PRICE_MIN, STAY_WINDOW_DAYS,
};
use crate::core::dates::format_api_date;

/// Field-level overrides applied on top of a generated booking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingOverrides {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub totalprice: Option<f64>,
    pub depositpaid: Option<bool>,
    pub bookingdates: Option<BookingDates>,
    /// `Some(None)` removes the field
    pub additionalneeds: Option<Option<String>>,
}

impl BookingOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn totalprice(mut self, totalprice: f64) -> Self {
        self.totalprice = Some(totalprice);
        self
    }

    pub fn depositpaid(mut self, depositpaid: bool) -> Self {
        self.depositpaid = Some(depositpaid);
        self
    }

    pub fn bookingdates(mut self, bookingdates: BookingDates) -> Self {
        self.bookingdates = Some(bookingdates);
        self
    }

    pub fn additionalneeds(mut self, additionalneeds: impl Into<String>) -> Self {
        self.additionalneeds = Some(Some(additionalneeds.into()));
        self
    }

    pub fn without_additionalneeds(mut self) -> Self {
        self.additionalneeds = Some(None);
        self
    }

    /// Shallow merge; set fields replace the generated ones as-is
    pub fn apply(self, mut booking: Booking) -> Booking {
        if let Some(firstname) = self.firstname {
            booking.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            booking.lastname = lastname;
        }
        if let Some(totalprice) = self.totalprice {
            booking.totalprice = totalprice;
        }
        if let Some(depositpaid) = self.depositpaid {
            booking.depositpaid = depositpaid;
        }
        if let Some(bookingdates) = self.bookingdates {
            booking.bookingdates = bookingdates;
        }
        if let Some(additionalneeds) = self.additionalneeds {
            booking.additionalneeds = additionalneeds;
        }
        booking
    }
}

/// Field to corrupt in [`BookingFactory::generate_invalid_booking`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Firstname,
    Lastname,
    Totalprice,
    Depositpaid,
    Dates,
}

/// Random booking generator
///
/// `new()` draws from OS entropy, so no two runs match. `seeded()` makes a run
/// reproducible when chasing a flaky failure.
#[derive(Debug, Clone)]
pub struct BookingFactory {
    rng: StdRng,
    today: Option<NaiveDate>,
}

impl Default for BookingFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFactory {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            today: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today: None,
        }
    }

    /// Pin the reference date instead of reading the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// `CCYY-MM-DD`
    pub fn format_date(date: NaiveDate) -> String {
        format_api_date(date)
    }

    /// Collision-free guest name for filter tests
    pub fn unique_name(prefix: &str) -> String {
        format!("{}_{}", prefix, Uuid::new_v4().simple())
    }

    /// Checkin within the next 90 days, checkout up to 14 days later
    pub fn generate_booking_dates(&mut self) -> BookingDates {
        let checkin = self.today() + Duration::days(self.rng.gen_range(0..=CHECKIN_WINDOW_DAYS));
        let checkout = checkin + Duration::days(self.rng.gen_range(0..=STAY_WINDOW_DAYS));
        BookingDates::from_dates(checkin, checkout)
    }

    pub fn generate_valid_booking(&mut self, overrides: BookingOverrides) -> Booking {
        let bookingdates = self.generate_booking_dates();

        let booking = Booking {
            firstname: pick(&mut self.rng, FIRST_NAMES).to_string(),
            lastname: pick(&mut self.rng, LAST_NAMES).to_string(),
            totalprice: self.rng.gen_range(PRICE_MIN..=PRICE_MAX) as f64,
            depositpaid: self.rng.gen_bool(0.5),
            bookingdates,
            additionalneeds: Some(pick(&mut self.rng, ADDITIONAL_NEEDS).to_string()),
        };

        overrides.apply(booking)
    }

    /// Explicit overrides still win over `price`
    pub fn generate_booking_with_price(&mut self, price: f64, overrides: BookingOverrides) -> Booking {
        let overrides = BookingOverrides {
            totalprice: overrides.totalprice.or(Some(price)),
            ..overrides
        };
        self.generate_valid_booking(overrides)
    }

    pub fn generate_booking_with_guest(
        &mut self,
        firstname: &str,
        lastname: &str,
        overrides: BookingOverrides,
    ) -> Booking {
        let overrides = BookingOverrides {
            firstname: overrides.firstname.or_else(|| Some(firstname.to_string())),
            lastname: overrides.lastname.or_else(|| Some(lastname.to_string())),
            ..overrides
        };
        self.generate_valid_booking(overrides)
    }

    pub fn generate_booking_with_dates(
        &mut self,
        checkin: &str,
        checkout: &str,
        overrides: BookingOverrides,
    ) -> Booking {
        let overrides = BookingOverrides {
            bookingdates: overrides
                .bookingdates
                .or_else(|| Some(BookingDates::new(checkin, checkout))),
            ..overrides
        };
        self.generate_valid_booking(overrides)
    }

    /// Valid booking without the optional `additionalneeds`
    pub fn generate_minimal_booking(&mut self, overrides: BookingOverrides) -> Booking {
        let mut booking = self.generate_valid_booking(overrides);
        booking.additionalneeds = None;
        booking
    }

    /// Checkin up to a year ago, checkout within a week after it
    pub fn generate_booking_with_past_dates(&mut self) -> Booking {
        let checkin = self.today() - Duration::days(self.rng.gen_range(1..=PAST_WINDOW_DAYS));
        let checkout = checkin + Duration::days(self.rng.gen_range(0..=PAST_STAY_WINDOW_DAYS));
        self.generate_valid_booking(
            BookingOverrides::new().bookingdates(BookingDates::from_dates(checkin, checkout)),
        )
    }

    /// Checkin in the future, checkout strictly before it
    pub fn generate_booking_with_invalid_date_order(&mut self) -> Booking {
        let checkin = self.today() + Duration::days(self.rng.gen_range(1..=FUTURE_WINDOW_DAYS));
        let checkout =
            checkin - Duration::days(self.rng.gen_range(1..=INVERTED_STAY_WINDOW_DAYS));
        self.generate_valid_booking(
            BookingOverrides::new().bookingdates(BookingDates::from_dates(checkin, checkout)),
        )
    }

    /// Valid booking as JSON with one field corrupted
    pub fn generate_invalid_booking(&mut self, field: InvalidField) -> Value {
        let mut body = self.generate_valid_booking(BookingOverrides::new()).to_json();

        match field {
            InvalidField::Firstname => body["firstname"] = json!(""),
            InvalidField::Lastname => body["lastname"] = json!(""),
            InvalidField::Totalprice => body["totalprice"] = json!(-100),
            InvalidField::Depositpaid => body["depositpaid"] = json!("not-a-boolean"),
            InvalidField::Dates => {
                body["bookingdates"] = json!({
                    "checkin": "invalid-date",
                    "checkout": "invalid-date",
                })
            }
        }

        body
    }

    pub fn generate_multiple_bookings(&mut self, count: usize) -> Vec<Booking> {
        (0..count)
            .map(|_| self.generate_valid_booking(BookingOverrides::new()))
            .collect()
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}
