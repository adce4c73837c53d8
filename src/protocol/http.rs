// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the LED device.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use crate::command::{Endpoint, Method};
use crate::error::{Error, ValueError};
use crate::protocol::Destination;

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for the device connection.
///
/// Holds the destination as entered by the operator; it is normalized and
/// validated when the client is created.
///
/// # Examples
///
/// ```
/// use rgbled_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.10.2:80").with_timeout(Duration::from_secs(5));
/// assert_eq!(config.destination(), "192.168.10.2:80");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    destination: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
    /// Destination used when none is configured.
    pub const DEFAULT_DESTINATION: &'static str = "http://192.168.10.2:80";
    /// Environment variable overriding the initial destination.
    pub const DESTINATION_ENV: &'static str = "ESP32_URL";

    /// Creates a configuration for the given destination.
    #[must_use]
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration from the process environment.
    ///
    /// Uses `ESP32_URL` when it is set and not blank, otherwise
    /// [`DEFAULT_DESTINATION`](Self::DEFAULT_DESTINATION).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(Self::DESTINATION_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        let destination = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DESTINATION.to_string());
        Self::new(destination)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the destination as configured (not yet normalized).
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDestination` if the destination is empty,
    /// `Error::Value` if the timeout is zero, or `Error::Client` if the
    /// HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, Error> {
        if self.timeout.is_zero() {
            return Err(ValueError::ZeroTimeout.into());
        }
        let destination = Destination::parse(&self.destination)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(HttpClient {
            destination: RwLock::new(destination),
            client,
            timeout: self.timeout,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DESTINATION)
    }
}

// ============================================================================
// HttpClient - One exchange per call
// ============================================================================

/// HTTP client performing single exchanges with the device.
///
/// The destination sits behind a lock and is read when each request is
/// dispatched, so a replacement applies to every request sent after it.
#[derive(Debug)]
pub struct HttpClient {
    destination: RwLock<Destination>,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Returns the current destination.
    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination.read().clone()
    }

    /// Replaces the destination for all subsequent requests.
    pub fn set_destination(&self, destination: Destination) {
        tracing::debug!(destination = %destination, "Replacing destination");
        *self.destination.write() = destination;
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a bodyless request and discards the answer body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::DeviceRejected`.
    pub async fn send(&self, endpoint: Endpoint) -> Result<(), Error> {
        let request = self.request(endpoint);
        dispatch(endpoint, request).await.map(drop)
    }

    /// Sends `body` as JSON and discards the answer body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::DeviceRejected`.
    pub async fn send_json<T: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &T,
    ) -> Result<(), Error> {
        let request = self.request(endpoint).json(body);
        dispatch(endpoint, request).await.map(drop)
    }

    /// Sends a bodyless request and returns the answer body as text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::DeviceRejected`.
    pub async fn fetch_text(&self, endpoint: Endpoint) -> Result<String, Error> {
        let request = self.request(endpoint);
        let response = dispatch(endpoint, request).await?;

        let body = response
            .text()
            .await
            .map_err(|source| Error::Transport { endpoint, source })?;

        tracing::debug!(endpoint = %endpoint, body = %body, "Received HTTP response");

        Ok(body)
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = self.destination.read().url_for(endpoint);

        tracing::debug!(url = %url, endpoint = %endpoint, "Sending HTTP request");

        match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        }
    }
}

async fn dispatch(endpoint: Endpoint, request: RequestBuilder) -> Result<Response, Error> {
    let response = request
        .send()
        .await
        .map_err(|source| Error::Transport { endpoint, source })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(endpoint = %endpoint, status = status.as_u16(), "Device rejected request");
        return Err(Error::DeviceRejected {
            endpoint,
            status: status.as_u16(),
            reason: rejection_reason(status, &body),
        });
    }

    Ok(response)
}

fn rejection_reason(status: StatusCode, body: &str) -> String {
    let mut reason = format!(
        "HTTP {} - {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    let body = body.trim();
    if !body.is_empty() {
        reason.push_str(": ");
        reason.push_str(body);
    }
    reason
}
