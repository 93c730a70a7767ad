// Fixture Composition
//
// Wires the resource clients and a pre-authenticated token into each test.
// Setup failures surface as `AppError::Setup`, never as contract violations.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, RunConfig};
use crate::core::{AppError, Result};
use crate::modules::auth::AuthClient;
use crate::modules::booking::BookingClient;
use crate::modules::ping::PingClient;

/// Ready-to-use clients for one test
#[derive(Debug, Clone)]
pub struct ApiFixtures {
    pub config: Config,
    pub auth: AuthClient,
    pub booking: BookingClient,
    pub ping: PingClient,
}

impl ApiFixtures {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.run)?;
        let base_url = config.service.base_url.clone();

        Ok(Self {
            auth: AuthClient::new(client.clone(), base_url.clone()),
            booking: BookingClient::new(client.clone(), base_url.clone()),
            ping: PingClient::new(client, base_url),
            config,
        })
    }

    /// Load and validate configuration from the environment, then build fixtures
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        config.validate()?;
        Self::new(config)
    }

    pub fn base_url(&self) -> &str {
        &self.config.service.base_url
    }

    /// Token for the configured valid credentials
    pub async fn auth_token(&self) -> Result<String> {
        self.auth
            .get_valid_token(&self.config.auth.valid)
            .await
            .map_err(|failure| {
                AppError::setup(format!(
                    "Failed to generate authentication token for test: {}",
                    failure
                ))
            })
    }
}

/// Shared HTTP client: per-call timeout and JSON `Accept` by default
pub fn build_http_client(run: &RunConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .timeout(run.action_timeout)
        .default_headers(headers)
        .user_agent(concat!("booker-contract/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(AppError::from)
}

static TRACING: Once = Once::new();

/// Install a test subscriber once per process; `RUST_LOG` overrides the filter
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "booker_contract=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
