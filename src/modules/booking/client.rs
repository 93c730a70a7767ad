use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use super::models::{Booking, BookingIdsFilter};
use crate::core::{ResponseFormat, Result};
use crate::modules::auth::{AuthMode, Credentials};

/// Client for the `/booking` resource
///
/// Each operation maps to exactly one HTTP call. The `*_request` builders
/// expose the request before it is sent.
#[derive(Debug, Clone)]
pub struct BookingClient {
    client: Client,
    base_url: String,
}

impl BookingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/booking", self.base_url)
    }

    fn item_url(&self, booking_id: i64) -> String {
        format!("{}/booking/{}", self.base_url, booking_id)
    }

    // ========================================
    // Request builders
    // ========================================

    pub fn get_booking_ids_request(
        &self,
        filter: &BookingIdsFilter,
        format: ResponseFormat,
    ) -> RequestBuilder {
        let builder = self
            .client
            .get(self.collection_url())
            .header(ACCEPT, format.mime());

        if filter.is_empty() {
            builder
        } else {
            builder.query(filter)
        }
    }

    pub fn get_booking_request(&self, booking_id: i64, format: ResponseFormat) -> RequestBuilder {
        self.client
            .get(self.item_url(booking_id))
            .header(ACCEPT, format.mime())
    }

    pub fn create_booking_request<T: Serialize + ?Sized>(
        &self,
        body: &T,
        format: ResponseFormat,
    ) -> RequestBuilder {
        self.client
            .post(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, format.mime())
            .json(body)
    }

    pub fn update_booking_request<T: Serialize + ?Sized>(
        &self,
        booking_id: i64,
        body: &T,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
        format: ResponseFormat,
    ) -> RequestBuilder {
        let builder = self
            .client
            .put(self.item_url(booking_id))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, format.mime());

        AuthMode::resolve(token, basic_auth)
            .apply(builder)
            .json(body)
    }

    pub fn partial_update_booking_request(
        &self,
        booking_id: i64,
        patch: &Value,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
        format: ResponseFormat,
    ) -> RequestBuilder {
        let builder = self
            .client
            .patch(self.item_url(booking_id))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, format.mime());

        AuthMode::resolve(token, basic_auth)
            .apply(builder)
            .json(patch)
    }

    pub fn delete_booking_request(
        &self,
        booking_id: i64,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
    ) -> RequestBuilder {
        let builder = self
            .client
            .delete(self.item_url(booking_id))
            .header(CONTENT_TYPE, "application/json");

        AuthMode::resolve(token, basic_auth).apply(builder)
    }

    // ========================================
    // Operations
    // ========================================

    /// `GET /booking` with optional name/date filters
    pub async fn get_booking_ids(
        &self,
        filter: &BookingIdsFilter,
        format: ResponseFormat,
    ) -> Result<Response> {
        tracing::debug!(?filter, "GET /booking");
        Ok(self.get_booking_ids_request(filter, format).send().await?)
    }

    /// `GET /booking/{id}`
    pub async fn get_booking(&self, booking_id: i64, format: ResponseFormat) -> Result<Response> {
        tracing::debug!(booking_id, "GET /booking/{{id}}");
        Ok(self.get_booking_request(booking_id, format).send().await?)
    }

    /// `POST /booking`
    pub async fn create_booking(&self, booking: &Booking, format: ResponseFormat) -> Result<Response> {
        tracing::debug!(firstname = %booking.firstname, "POST /booking");
        Ok(self.create_booking_request(booking, format).send().await?)
    }

    /// `POST /booking` with an arbitrary body, for payloads that break the schema
    pub async fn create_booking_raw(&self, body: &Value, format: ResponseFormat) -> Result<Response> {
        tracing::debug!("POST /booking (raw body)");
        Ok(self.create_booking_request(body, format).send().await?)
    }

    /// `PUT /booking/{id}`; token takes precedence over basic auth
    pub async fn update_booking(
        &self,
        booking_id: i64,
        booking: &Booking,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
        format: ResponseFormat,
    ) -> Result<Response> {
        tracing::debug!(booking_id, "PUT /booking/{{id}}");
        Ok(self
            .update_booking_request(booking_id, booking, token, basic_auth, format)
            .send()
            .await?)
    }

    pub async fn update_booking_raw(
        &self,
        booking_id: i64,
        body: &Value,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
        format: ResponseFormat,
    ) -> Result<Response> {
        tracing::debug!(booking_id, "PUT /booking/{{id}} (raw body)");
        Ok(self
            .update_booking_request(booking_id, body, token, basic_auth, format)
            .send()
            .await?)
    }

    /// `PATCH /booking/{id}`
    pub async fn partial_update_booking(
        &self,
        booking_id: i64,
        patch: &Value,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
        format: ResponseFormat,
    ) -> Result<Response> {
        tracing::debug!(booking_id, "PATCH /booking/{{id}}");
        Ok(self
            .partial_update_booking_request(booking_id, patch, token, basic_auth, format)
            .send()
            .await?)
    }

    /// `DELETE /booking/{id}`
    pub async fn delete_booking(
        &self,
        booking_id: i64,
        token: Option<&str>,
        basic_auth: Option<&Credentials>,
    ) -> Result<Response> {
        tracing::debug!(booking_id, "DELETE /booking/{{id}}");
        Ok(self
            .delete_booking_request(booking_id, token, basic_auth)
            .send()
            .await?)
    }
}
