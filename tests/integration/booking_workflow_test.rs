// End-to-end booking workflows against a live service
//
// Runs the same scenarios the binary runs, plus a few cross-endpoint flows
// that chain create, filter, update and delete.

#[path = "../helpers/mod.rs"]
mod helpers;

use booker_contract::booking::{
    BookingDates, BookingFactory, BookingIdsFilter, BookingOverrides, BookingValidators,
};
use booker_contract::suite::scenarios::{
    BookingLifecycle, ConcurrentCreation, FilterByName, UnauthenticatedMutation,
};
use booker_contract::suite::{default_scenarios, Runner, Scenario};
use futures_util::future::join_all;
use helpers::*;

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_complete_lifecycle() {
    let fixtures = fixtures();
    let token = auth_token(&fixtures).await;
    let mut factory = BookingFactory::new();

    let original = factory.generate_booking_with_guest(
        "E2E",
        "TestUser",
        BookingOverrides::new()
            .totalprice(150.0)
            .depositpaid(true)
            .bookingdates(BookingDates::new("2025-06-01", "2025-06-05")),
    );
    let id = create_booking(&fixtures, &original).await;

    let response = fixtures.booking.get_booking(id, JSON).await.unwrap();
    let fetched = BookingValidators::assert_valid_get_booking_response_schema(response)
        .await
        .unwrap();
    assert!(fetched.same_contents(&original));

    let replacement = factory.generate_booking_with_guest(
        "Updated",
        "Name",
        BookingOverrides::new().bookingdates(original.bookingdates.clone()),
    );
    let response = fixtures
        .booking
        .update_booking(id, &replacement, Some(&token), None, JSON)
        .await
        .unwrap();
    let updated = BookingValidators::assert_valid_update_booking_response_schema(response)
        .await
        .unwrap();
    assert_eq!(updated.firstname, "Updated");

    let response = fixtures.booking.delete_booking(id, Some(&token), None).await.unwrap();
    assert_created(&response);

    let response = fixtures.booking.get_booking(id, JSON).await.unwrap();
    assert_not_found(&response);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_concurrent_creations_get_distinct_ids() {
    let fixtures = fixtures();
    let token = auth_token(&fixtures).await;
    let bookings = BookingFactory::new().generate_multiple_bookings(3);

    let ids = join_all(bookings.iter().map(|booking| create_booking(&fixtures, booking))).await;

    let mut distinct = ids.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), bookings.len());

    for (id, booking) in ids.iter().zip(&bookings) {
        let response = fixtures.booking.get_booking(*id, JSON).await.unwrap();
        let fetched = BookingValidators::assert_valid_get_booking_response_schema(response)
            .await
            .unwrap();
        assert!(fetched.same_contents(booking));
    }

    join_all(ids.iter().map(|id| cleanup_booking(&fixtures, &token, *id))).await;
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_renamed_booking_moves_between_filters() {
    let fixtures = fixtures();
    let token = auth_token(&fixtures).await;
    let mut factory = BookingFactory::new();
    let before = BookingFactory::unique_name("Before");
    let after = BookingFactory::unique_name("After");

    let booking = factory.generate_booking_with_guest(&before, "Mover", BookingOverrides::new());
    let id = create_booking(&fixtures, &booking).await;

    let renamed = factory.generate_booking_with_guest(
        &after,
        "Mover",
        BookingOverrides::new().bookingdates(booking.bookingdates.clone()),
    );
    let response = fixtures
        .booking
        .update_booking(id, &renamed, Some(&token), None, JSON)
        .await
        .unwrap();
    assert_ok(&response);

    let response = fixtures
        .booking
        .get_booking_ids(&BookingIdsFilter::default().firstname(&before), JSON)
        .await
        .unwrap();
    let old_matches = BookingValidators::assert_valid_get_booking_ids_response_schema(response)
        .await
        .unwrap();
    assert!(old_matches.iter().all(|item| item.bookingid != id));

    let response = fixtures
        .booking
        .get_booking_ids(&BookingIdsFilter::default().firstname(&after), JSON)
        .await
        .unwrap();
    let new_matches = BookingValidators::assert_valid_get_booking_ids_response_schema(response)
        .await
        .unwrap();
    assert!(new_matches.iter().any(|item| item.bookingid == id));

    cleanup_booking(&fixtures, &token, id).await;
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_scenarios_pass_individually() {
    let fixtures = fixtures();

    BookingLifecycle.run(&fixtures).await.unwrap();
    UnauthenticatedMutation.run(&fixtures).await.unwrap();
    FilterByName.run(&fixtures).await.unwrap();
    ConcurrentCreation { count: 2 }.run(&fixtures).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_default_suite_passes() {
    let runner = Runner::new(fixtures());

    let report = runner.run(default_scenarios()).await.unwrap();

    for outcome in &report.outcomes {
        assert!(outcome.passed(), "{} failed: {:?}", outcome.name, outcome.result);
    }
    assert!(report.is_success());
}
