// Contract tests for GET /booking
//
// Filters narrow the id list; a filter matching nothing yields `[]`.

#[path = "../helpers/mod.rs"]
mod helpers;

use booker_contract::booking::{
    BookingDates, BookingFactory, BookingIdsFilter, BookingOverrides, BookingValidators,
};
use booker_contract::fixtures::ApiFixtures;
use helpers::*;

async fn ids_for(fixtures: &ApiFixtures, filter: &BookingIdsFilter) -> Vec<i64> {
    let response = fixtures.booking.get_booking_ids(filter, JSON).await.unwrap();
    BookingValidators::assert_valid_get_booking_ids_response_schema(response)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.bookingid)
        .collect()
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_unfiltered_list_is_not_empty() {
    let fixtures = fixtures();
    create_test_booking(&fixtures).await;

    let ids = ids_for(&fixtures, &BookingIdsFilter::default()).await;

    assert!(!ids.is_empty());
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_filter_by_firstname() {
    let fixtures = fixtures();
    let firstname = BookingFactory::unique_name("TestFilter");
    let booking =
        BookingFactory::new().generate_booking_with_guest(&firstname, "FilterTest", BookingOverrides::new());
    let id = create_booking(&fixtures, &booking).await;

    let ids = ids_for(&fixtures, &BookingIdsFilter::default().firstname(&firstname)).await;

    assert!(ids.contains(&id), "{} not in {:?}", id, ids);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_filter_by_lastname() {
    let fixtures = fixtures();
    let lastname = BookingFactory::unique_name("TestLastname");
    let booking =
        BookingFactory::new().generate_booking_with_guest("FilterTest", &lastname, BookingOverrides::new());
    let id = create_booking(&fixtures, &booking).await;

    let ids = ids_for(&fixtures, &BookingIdsFilter::default().lastname(&lastname)).await;

    assert!(ids.contains(&id), "{} not in {:?}", id, ids);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_filter_by_full_name() {
    let fixtures = fixtures();
    let firstname = BookingFactory::unique_name("Both");
    let lastname = BookingFactory::unique_name("Names");
    let booking =
        BookingFactory::new().generate_booking_with_guest(&firstname, &lastname, BookingOverrides::new());
    let id = create_booking(&fixtures, &booking).await;

    let filter = BookingIdsFilter::default()
        .firstname(&firstname)
        .lastname(&lastname);
    let ids = ids_for(&fixtures, &filter).await;

    assert!(ids.contains(&id), "{} not in {:?}", id, ids);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_filter_by_dates() {
    let fixtures = fixtures();
    let (id, booking) = create_test_booking(&fixtures).await;
    let dates = &booking.bookingdates;

    for filter in [
        BookingIdsFilter::default().checkin(&dates.checkin),
        BookingIdsFilter::default().checkout(&dates.checkout),
        BookingIdsFilter::default()
            .checkin(&dates.checkin)
            .checkout(&dates.checkout),
    ] {
        let ids = ids_for(&fixtures, &filter).await;
        assert!(ids.contains(&id), "{} not in {:?} for {:?}", id, ids, filter);
    }
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_filter_with_all_parameters() {
    let fixtures = fixtures();
    let firstname = BookingFactory::unique_name("AllFilters");
    let lastname = BookingFactory::unique_name("Test");
    let booking = BookingFactory::new().generate_booking_with_guest(
        &firstname,
        &lastname,
        BookingOverrides::new().bookingdates(BookingDates::new("2025-09-10", "2025-09-12")),
    );
    let id = create_booking(&fixtures, &booking).await;

    let filter = BookingIdsFilter::default()
        .firstname(&firstname)
        .lastname(&lastname)
        .checkin("2025-09-10")
        .checkout("2025-09-12");
    let ids = ids_for(&fixtures, &filter).await;

    assert!(ids.contains(&id), "{} not in {:?}", id, ids);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_unknown_firstname_yields_empty_list() {
    let fixtures = fixtures();

    let filter = BookingIdsFilter::default().firstname(BookingFactory::unique_name("NonExistent"));
    let ids = ids_for(&fixtures, &filter).await;

    assert!(ids.is_empty(), "unexpected matches: {:?}", ids);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_special_characters_in_filter() {
    let fixtures = fixtures();

    let response = fixtures
        .booking
        .get_booking_ids(&BookingIdsFilter::default().firstname("O'Brien"), JSON)
        .await
        .unwrap();

    BookingValidators::assert_valid_get_booking_ids_response_schema(response)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_malformed_checkin_is_tolerated() {
    let fixtures = fixtures();

    let response = reqwest::Client::new()
        .get(format!("{}/booking", fixtures.base_url()))
        .query(&[("checkin", "01/01/2024")])
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .unwrap();

    assert_ok(&response);
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_far_future_checkin_returns_list() {
    let fixtures = fixtures();

    let ids = ids_for(&fixtures, &BookingIdsFilter::default().checkin("2099-12-31")).await;

    assert!(ids.iter().all(|id| *id > 0));
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_past_checkin_returns_list() {
    let fixtures = fixtures();
    create_test_booking(&fixtures).await;

    let ids = ids_for(&fixtures, &BookingIdsFilter::default().checkin("2000-01-01")).await;

    assert!(ids.iter().all(|id| *id > 0));
}

#[tokio::test]
#[ignore = "Requires live booking service"]
async fn test_empty_firstname_filter_is_ignored() {
    let fixtures = fixtures();
    create_test_booking(&fixtures).await;

    let response = reqwest::Client::new()
        .get(format!("{}/booking", fixtures.base_url()))
        .query(&[("firstname", "")])
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .unwrap();
    assert_ok(&response);

    let ids = BookingValidators::assert_valid_get_booking_ids_response_schema(response)
        .await
        .unwrap();
    assert!(!ids.is_empty());
}
