//! Booker Contract Suite Library
//!
//! Contract-verification toolkit for the Restful Booker HTTP service: typed
//! resource clients, a randomized test data factory, fail-fast response
//! validators and per-test fixtures.

pub mod config;
pub mod core;
pub mod fixtures;
pub mod modules;
pub mod suite;

// Re-export commonly used types
pub use modules::auth;
pub use modules::booking;
pub use modules::ping;
