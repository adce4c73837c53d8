// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device client builder.

use std::time::Duration;

use crate::device::DeviceClient;
use crate::error::Error;
use crate::palette::Palette;
use crate::protocol::HttpConfig;

/// Builder for [`DeviceClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rgbled_lib::{DeviceClient, Palette};
/// use rgbled_lib::types::RgbColor;
///
/// # fn example() -> rgbled_lib::Result<()> {
/// let client = DeviceClient::builder("192.168.10.2")
///     .with_timeout(Duration::from_secs(5))
///     .with_palette(Palette::new([("red", RgbColor::new(255, 0, 0))]))
///     .build()?;
///
/// assert_eq!(client.timeout(), Duration::from_secs(5));
/// assert_eq!(client.palette().len(), 1);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct DeviceClientBuilder {
    config: HttpConfig,
    palette: Option<Palette>,
}

impl DeviceClientBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            palette: None,
        }
    }

    /// Sets the request timeout. It cannot be changed once built.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Replaces the default palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Builds the client. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDestination` for a blank destination,
    /// `Error::Value` for a zero timeout, or `Error::Client` if the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<DeviceClient, Error> {
        let http = self.config.into_client()?;
        Ok(DeviceClient::from_parts(
            http,
            self.palette.unwrap_or_default(),
        ))
    }
}
