// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device wire contract.
//!
//! The firmware exposes four fixed endpoints:
//!
//! | Endpoint | Method | Body | Answer |
//! |----------|--------|------|--------|
//! | `/set_color` | POST | [`SetColorPayload`] as JSON | status only |
//! | `/off` | POST | none | status only |
//! | `/ack` | GET | none | `text/plain`, e.g. `OK: rojo (255,0,0)` |
//! | `/status` | GET | none | JSON, see [`DeviceStatus`](crate::response::DeviceStatus) |
//!
//! Command endpoints carry no descriptive body; the confirmation text is
//! read separately from `/ack`.
//!
//! # Examples
//!
//! ```
//! use rgbled_lib::Palette;
//! use rgbled_lib::command::{Endpoint, SetColorPayload};
//!
//! let payload = SetColorPayload::named("ROJO", &Palette::default());
//! assert_eq!(
//!     serde_json::to_string(&payload).unwrap(),
//!     r#"{"color":"rojo","rgb":[255,0,0]}"#
//! );
//! assert_eq!(Endpoint::SetColor.path(), "/set_color");
//! ```

use std::fmt;

use serde::Serialize;

use crate::palette::Palette;
use crate::types::{ColorName, RgbColor};

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read-only query.
    Get,
    /// Command.
    Post,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One of the device endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /set_color`
    SetColor,
    /// `POST /off`
    Off,
    /// `GET /ack`
    Ack,
    /// `GET /status`
    Status,
}

impl Endpoint {
    /// Returns the path relative to the destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SetColor => "/set_color",
            Self::Off => "/off",
            Self::Ack => "/ack",
            Self::Status => "/status",
        }
    }

    /// Returns the HTTP method this endpoint expects.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::SetColor | Self::Off => Method::Post,
            Self::Ack | Self::Status => Method::Get,
        }
    }

    /// Returns `true` if the endpoint changes device state.
    #[must_use]
    pub const fn is_command(self) -> bool {
        matches!(self.method(), Method::Post)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method().as_str(), self.path())
    }
}

/// JSON body of `POST /set_color`.
///
/// Either field may be absent: a named color outside the palette is sent
/// without `rgb`, and a raw triple is sent without `color`. The firmware
/// decides what to do with an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetColorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<ColorName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rgb: Option<RgbColor>,
}

impl SetColorPayload {
    /// Builds the payload for a named color, attaching the palette triple
    /// when the name is known.
    ///
    /// ```
    /// use rgbled_lib::Palette;
    /// use rgbled_lib::command::SetColorPayload;
    ///
    /// let payload = SetColorPayload::named("notacolor", &Palette::default());
    /// assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"color":"notacolor"}"#);
    /// ```
    #[must_use]
    pub fn named(name: &str, palette: &Palette) -> Self {
        let name = ColorName::new(name);
        let rgb = palette.lookup(name.as_str());
        Self {
            color: Some(name),
            rgb,
        }
    }

    /// Builds the payload for a raw triple, with no color name.
    #[must_use]
    pub fn rgb(rgb: RgbColor) -> Self {
        Self {
            color: None,
            rgb: Some(rgb),
        }
    }

    /// Returns the color name, if any.
    #[must_use]
    pub fn color(&self) -> Option<&ColorName> {
        self.color.as_ref()
    }

    /// Returns the RGB triple, if any.
    #[must_use]
    pub fn rgb_color(&self) -> Option<RgbColor> {
        self.rgb
    }
}
