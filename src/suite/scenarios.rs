use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::StatusCode;
use std::sync::Arc;

use super::Scenario;
use crate::core::{AppError, ResponseFormat, Result};
use crate::fixtures::ApiFixtures;
use crate::modules::booking::{
    BookingDates, BookingFactory, BookingIdsFilter, BookingOverrides, BookingValidators,
};

const JSON: ResponseFormat = ResponseFormat::Json;

/// Scenarios run by the binary, in declaration order
pub fn default_scenarios() -> Vec<Arc<dyn Scenario>> {
    vec![
        Arc::new(HealthCheck),
        Arc::new(TokenIssuance),
        Arc::new(BookingLifecycle),
        Arc::new(UnauthenticatedMutation),
        Arc::new(FilterByName),
        Arc::new(ConcurrentCreation { count: 3 }),
    ]
}

/// `GET /ping` answers 201
pub struct HealthCheck;

#[async_trait]
impl Scenario for HealthCheck {
    fn name(&self) -> &'static str {
        "health-check"
    }

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()> {
        let response = fixtures.ping.health_check().await?;
        BookingValidators::assert_status(response, StatusCode::CREATED).await?;
        Ok(())
    }
}

/// Valid credentials yield a token; invalid ones do not
pub struct TokenIssuance;

#[async_trait]
impl Scenario for TokenIssuance {
    fn name(&self) -> &'static str {
        "token-issuance"
    }

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()> {
        let response = fixtures.auth.create_token(&fixtures.config.auth.valid).await?;
        BookingValidators::assert_valid_create_token_response_schema(response).await?;

        if fixtures
            .auth
            .get_valid_token(&fixtures.config.auth.invalid)
            .await
            .is_ok()
        {
            return Err(AppError::contract("invalid credentials were issued a token"));
        }
        Ok(())
    }
}

/// Create, read, update, delete, then confirm the booking is gone
pub struct BookingLifecycle;

#[async_trait]
impl Scenario for BookingLifecycle {
    fn name(&self) -> &'static str {
        "booking-lifecycle"
    }

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()> {
        let token = fixtures.auth_token().await?;
        let mut factory = BookingFactory::new();

        let original = factory.generate_booking_with_guest(
            "E2E",
            "TestUser",
            BookingOverrides::new()
                .totalprice(150.0)
                .depositpaid(true)
                .bookingdates(BookingDates::new("2025-06-01", "2025-06-05")),
        );

        let response = fixtures.booking.create_booking(&original, JSON).await?;
        let created = BookingValidators::assert_valid_create_booking_response_schema(response).await?;
        let id = created.bookingid;

        let response = fixtures.booking.get_booking(id, JSON).await?;
        let fetched = BookingValidators::assert_valid_get_booking_response_schema(response).await?;
        if !fetched.same_contents(&original) {
            return Err(AppError::contract(format!(
                "booking {} changed between create and get: {:?} vs {:?}",
                id, original, fetched
            )));
        }

        let replacement = factory.generate_booking_with_guest(
            "Updated",
            "Name",
            BookingOverrides::new().bookingdates(original.bookingdates.clone()),
        );
        let response = fixtures
            .booking
            .update_booking(id, &replacement, Some(&token), None, JSON)
            .await?;
        let updated = BookingValidators::assert_valid_update_booking_response_schema(response).await?;
        if updated.firstname != "Updated" {
            return Err(AppError::contract(format!(
                "update was not applied, firstname is {}",
                updated.firstname
            )));
        }

        let response = fixtures.booking.delete_booking(id, Some(&token), None).await?;
        BookingValidators::assert_status(response, StatusCode::CREATED).await?;

        let response = fixtures.booking.get_booking(id, JSON).await?;
        BookingValidators::assert_status(response, StatusCode::NOT_FOUND).await?;
        Ok(())
    }
}

/// Delete without credentials is refused and the booking survives
pub struct UnauthenticatedMutation;

#[async_trait]
impl Scenario for UnauthenticatedMutation {
    fn name(&self) -> &'static str {
        "unauthenticated-mutation"
    }

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()> {
        let token = fixtures.auth_token().await?;
        let booking = BookingFactory::new().generate_valid_booking(BookingOverrides::new());
        let response = fixtures.booking.create_booking(&booking, JSON).await?;
        let created = BookingValidators::assert_valid_create_booking_response_schema(response).await?;
        let id = created.bookingid;

        let checked = async {
            let response = fixtures.booking.delete_booking(id, None, None).await?;
            let status = response.status();
            if !is_auth_rejection(status) {
                return Err(AppError::unexpected_status(
                    StatusCode::UNAUTHORIZED,
                    status,
                    response.text().await?,
                ));
            }

            let response = fixtures.booking.get_booking(id, JSON).await?;
            let still_there =
                BookingValidators::assert_valid_get_booking_response_schema(response).await?;
            if !still_there.same_contents(&booking) {
                return Err(AppError::contract("rejected delete modified the booking"));
            }
            Ok::<(), AppError>(())
        }
        .await;

        let removed = remove_booking(fixtures, &token, id).await;
        checked.and(removed)
    }
}

/// A fresh unique firstname filters down to the new booking; an unknown one to `[]`
pub struct FilterByName;

#[async_trait]
impl Scenario for FilterByName {
    fn name(&self) -> &'static str {
        "filter-by-name"
    }

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()> {
        let firstname = BookingFactory::unique_name("TestFilter");
        let booking = BookingFactory::new().generate_booking_with_guest(
            &firstname,
            "FilterTest",
            BookingOverrides::new(),
        );

        let token = fixtures.auth_token().await?;
        let response = fixtures.booking.create_booking(&booking, JSON).await?;
        let created = BookingValidators::assert_valid_create_booking_response_schema(response).await?;
        let id = created.bookingid;

        let checked = async {
            let response = fixtures
                .booking
                .get_booking_ids(&BookingIdsFilter::default().firstname(&firstname), JSON)
                .await?;
            let ids = BookingValidators::assert_valid_get_booking_ids_response_schema(response).await?;
            if !ids.iter().any(|item| item.bookingid == id) {
                return Err(AppError::contract(format!(
                    "booking {} missing from firstname filter",
                    id
                )));
            }

            let response = fixtures
                .booking
                .get_booking_ids(
                    &BookingIdsFilter::default().firstname(BookingFactory::unique_name("NonExistent")),
                    JSON,
                )
                .await?;
            let ids = BookingValidators::assert_valid_get_booking_ids_response_schema(response).await?;
            if !ids.is_empty() {
                return Err(AppError::contract(format!(
                    "unknown firstname matched {} bookings",
                    ids.len()
                )));
            }
            Ok::<(), AppError>(())
        }
        .await;

        let removed = remove_booking(fixtures, &token, id).await;
        checked.and(removed)
    }
}

/// Fan out creations, join, then check every id is distinct and readable
pub struct ConcurrentCreation {
    pub count: usize,
}

#[async_trait]
impl Scenario for ConcurrentCreation {
    fn name(&self) -> &'static str {
        "concurrent-creation"
    }

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()> {
        let token = fixtures.auth_token().await?;
        let bookings = BookingFactory::new().generate_multiple_bookings(self.count);

        let created = join_all(bookings.iter().map(|booking| async move {
            let response = fixtures.booking.create_booking(booking, JSON).await?;
            BookingValidators::assert_valid_create_booking_response_schema(response).await
        }))
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

        let mut ids: Vec<i64> = created.iter().map(|c| c.bookingid).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.count {
            return Err(AppError::contract("concurrent creations shared a booking id"));
        }

        let fetched = join_all(created.iter().map(|c| async move {
            let response = fixtures.booking.get_booking(c.bookingid, JSON).await?;
            BookingValidators::assert_valid_get_booking_response_schema(response).await
        }))
        .await;
        for (expected, actual) in bookings.iter().zip(fetched) {
            if !actual?.same_contents(expected) {
                return Err(AppError::contract("concurrently created booking read back differently"));
            }
        }

        join_all(
            created
                .iter()
                .map(|c| fixtures.booking.delete_booking(c.bookingid, Some(&token), None)),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
        Ok(())
    }
}

/// Runs even when the checks before it failed, so a scenario leaves no bookings behind
async fn remove_booking(fixtures: &ApiFixtures, token: &str, id: i64) -> Result<()> {
    let response = fixtures.booking.delete_booking(id, Some(token), None).await?;
    BookingValidators::assert_status(response, StatusCode::CREATED).await?;
    Ok(())
}

/// The public service answers 403 where the contract documents 401
pub fn is_auth_rejection(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}
