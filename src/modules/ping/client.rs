use reqwest::{Client, RequestBuilder, Response};

use crate::core::Result;

/// Client for the `/ping` liveness check
#[derive(Debug, Clone)]
pub struct PingClient {
    client: Client,
    base_url: String,
}

impl PingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn health_check_request(&self) -> RequestBuilder {
        self.client.get(format!("{}/ping", self.base_url))
    }

    /// `GET /ping`; a healthy service answers 201
    pub async fn health_check(&self) -> Result<Response> {
        tracing::debug!("GET /ping");
        Ok(self.health_check_request().send().await?)
    }
}
