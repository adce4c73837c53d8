// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for the RGB LED device.
//!
//! # Command, then acknowledge
//!
//! The firmware answers `POST /set_color` and `POST /off` with a bare
//! status. The human-readable confirmation lives at `GET /ack`, so every
//! state-changing operation performs two exchanges: the command, and on
//! acceptance an ack fetch whose text is returned.
//!
//! ```no_run
//! use rgbled_lib::DeviceClient;
//!
//! # async fn example() -> rgbled_lib::Result<()> {
//! let client = DeviceClient::new("192.168.10.2:80")?;
//!
//! let ack = client.turn_on_color("rojo").await?;
//! println!("{ack}"); // e.g. "OK: rojo (255,0,0)"
//!
//! let status = client.fetch_status().await?;
//! println!("{status}");
//!
//! client.turn_off().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The client keeps no device state between calls; the device is the only
//! source of truth.

mod builder;

pub use builder::DeviceClientBuilder;

use std::time::Duration;

use crate::command::{Endpoint, SetColorPayload};
use crate::error::Error;
use crate::palette::Palette;
use crate::protocol::{Destination, HttpClient, HttpConfig};
use crate::response::DeviceStatus;
use crate::types::{ColorName, RgbColor};

/// Client controlling one RGB LED device over HTTP.
///
/// Holds the current destination, a fixed request timeout and the color
/// palette. All methods take `&self`; the destination is read when each
/// request is dispatched, so [`set_destination`](Self::set_destination)
/// applies to every request sent after it returns.
#[derive(Debug)]
pub struct DeviceClient {
    http: HttpClient,
    palette: Palette,
}

impl DeviceClient {
    /// Creates a client with the default palette and timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDestination` if `destination` is empty, or
    /// `Error::Client` if the HTTP client cannot be created.
    pub fn new(destination: impl Into<String>) -> Result<Self, Error> {
        Self::builder(destination).build()
    }

    /// Returns a builder for custom timeout or palette.
    #[must_use]
    pub fn builder(destination: impl Into<String>) -> DeviceClientBuilder {
        DeviceClientBuilder::new(HttpConfig::new(destination))
    }

    /// Returns a builder for an existing connection configuration.
    #[must_use]
    pub fn with_config(config: HttpConfig) -> DeviceClientBuilder {
        DeviceClientBuilder::new(config)
    }

    /// Creates a client whose destination comes from `ESP32_URL`, falling
    /// back to [`HttpConfig::DEFAULT_DESTINATION`].
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(HttpConfig::from_env()).build()
    }

    pub(crate) fn from_parts(http: HttpClient, palette: Palette) -> Self {
        Self { http, palette }
    }

    // ========== Destination ==========

    /// Returns the current destination.
    #[must_use]
    pub fn destination(&self) -> Destination {
        self.http.destination()
    }

    /// Normalizes `url` and makes it the destination for all subsequent
    /// requests. No reachability check is performed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDestination` if `url` is blank or holds only
    /// a scheme. The previous destination is kept in that case.
    pub fn set_destination(&self, url: &str) -> Result<(), Error> {
        let destination = Destination::parse(url)?;
        self.http.set_destination(destination);
        Ok(())
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    // ========== Palette ==========

    /// Returns the palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the palette's color names in display order.
    pub fn color_names(&self) -> impl ExactSizeIterator<Item = &ColorName> + Clone + '_ {
        self.palette.names()
    }

    // ========== Commands ==========

    /// Turns the LED on with a named color and returns the device ack.
    ///
    /// The name is normalized and looked up in the palette. A known name is
    /// sent with its triple; an unknown one is still sent, without `rgb`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::DeviceRejected` if either the
    /// command or the ack fetch fails. The ack is not fetched when the
    /// command fails.
    pub async fn turn_on_color(&self, name: &str) -> Result<String, Error> {
        let payload = SetColorPayload::named(name, &self.palette);
        self.http.send_json(Endpoint::SetColor, &payload).await?;
        self.fetch_ack().await
    }

    /// Sets a raw RGB color and returns the device ack.
    ///
    /// # Errors
    ///
    /// Same as [`turn_on_color`](Self::turn_on_color).
    pub async fn set_rgb(&self, red: u8, green: u8, blue: u8) -> Result<String, Error> {
        self.set_rgb_color(RgbColor::new(red, green, blue)).await
    }

    /// Sets a raw RGB color and returns the device ack.
    ///
    /// # Errors
    ///
    /// Same as [`turn_on_color`](Self::turn_on_color).
    pub async fn set_rgb_color(&self, color: RgbColor) -> Result<String, Error> {
        let payload = SetColorPayload::rgb(color);
        self.http.send_json(Endpoint::SetColor, &payload).await?;
        self.fetch_ack().await
    }

    /// Turns the LED off and returns the device ack.
    ///
    /// # Errors
    ///
    /// Same as [`turn_on_color`](Self::turn_on_color).
    pub async fn turn_off(&self) -> Result<String, Error> {
        self.http.send(Endpoint::Off).await?;
        self.fetch_ack().await
    }

    // ========== Queries ==========

    /// Reads the acknowledgment text of the last command.
    ///
    /// Surrounding whitespace (typically a trailing newline) is removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::DeviceRejected`.
    pub async fn fetch_ack(&self) -> Result<String, Error> {
        let body = self.http.fetch_text(Endpoint::Ack).await?;
        Ok(body.trim().to_string())
    }

    /// Reads and decodes the device status.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::DeviceRejected` if the exchange
    /// fails, `Error::Protocol` if the body does not decode, and
    /// `Error::DeviceRejected` if the status flag is not `"ok"`.
    pub async fn fetch_status(&self) -> Result<DeviceStatus, Error> {
        let endpoint = Endpoint::Status;
        let body = self.http.fetch_text(endpoint).await?;
        let status =
            DeviceStatus::parse(&body).map_err(|source| Error::Protocol { endpoint, source })?;

        if !status.is_ok() {
            return Err(Error::DeviceRejected {
                endpoint,
                status: 200,
                reason: format!("device reported status {:?}", status.status()),
            });
        }

        Ok(status)
    }
}
