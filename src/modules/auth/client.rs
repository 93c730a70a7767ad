use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use super::models::Credentials;
use crate::core::{AuthFailure, Result};

/// Client for `POST /auth`
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn create_token_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.create_token_raw_request(credentials)
    }

    /// Token request with an arbitrary JSON body, for malformed-credential checks
    pub fn create_token_raw_request<T: serde::Serialize + ?Sized>(&self, body: &T) -> RequestBuilder {
        self.client
            .post(format!("{}/auth", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body)
    }

    /// Issue a token-creation call and return the raw response
    pub async fn create_token(&self, credentials: &Credentials) -> Result<Response> {
        tracing::debug!(username = %credentials.username, "POST /auth");
        Ok(self.create_token_request(credentials).send().await?)
    }

    pub async fn create_token_raw(&self, body: &Value) -> Result<Response> {
        tracing::debug!("POST /auth (raw body)");
        Ok(self.create_token_raw_request(body).send().await?)
    }

    /// Obtain a token, reporting why when none is available
    pub async fn get_valid_token(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<String, AuthFailure> {
        let response = self
            .create_token_request(credentials)
            .send()
            .await
            .map_err(|e| AuthFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token request rejected");
            return Err(AuthFailure::Rejected {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| AuthFailure::MissingToken { reason: None })?;

        extract_token(&body)
    }
}

/// Pull the token out of a 2xx `POST /auth` body
pub fn extract_token(body: &Value) -> std::result::Result<String, AuthFailure> {
    match body.get("token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => {
            let reason = body
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_string);
            tracing::warn!(reason = ?reason, "token missing from auth response");
            Err(AuthFailure::MissingToken { reason })
        }
    }
}
