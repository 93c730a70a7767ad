pub mod client;
pub mod factory;
pub mod models;
pub mod validators;

pub use client::BookingClient;
pub use factory::{BookingFactory, BookingOverrides, InvalidField};
pub use models::{Booking, BookingDates, BookingIdObject, BookingIdsFilter, CreateBookingResponse};
pub use validators::BookingValidators;
