pub mod client;
pub mod models;

pub use client::AuthClient;
pub use models::{AuthMode, CreateTokenResponse, Credentials};
