// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use std::fmt;

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::RgbColor;

/// Status flag the firmware reports when it is healthy.
pub const STATUS_OK: &str = "ok";

/// Decoded answer of `GET /status`.
///
/// # Examples
///
/// ```
/// use rgbled_lib::response::DeviceStatus;
/// use rgbled_lib::types::RgbColor;
///
/// let status = DeviceStatus::parse(r#"{"status":"ok","color":"azul","rgb":[0,0,255]}"#).unwrap();
/// assert!(status.is_ok());
/// assert_eq!(status.color(), Some("azul"));
/// assert_eq!(status.rgb(), Some(RgbColor::new(0, 0, 255)));
/// assert_eq!(status.to_string(), "Color: azul  RGB: (0,0,255)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStatus {
    status: String,
    color: Option<String>,
    rgb: Option<RgbColor>,
    raw: serde_json::Value,
}

#[derive(Deserialize)]
struct StatusFields {
    status: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    rgb: Option<RgbColor>,
}

impl DeviceStatus {
    /// Parses a status body.
    ///
    /// The body must be a JSON object with a string `status` field. `color`
    /// and `rgb` may be missing or `null`; when present they must be a
    /// string and a `[r, g, b]` array of 0-255 integers. Extra fields are
    /// kept in [`raw()`](Self::raw).
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not JSON, not an object, lacks
    /// `status`, or has fields of the wrong shape.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let raw: serde_json::Value = serde_json::from_str(body)?;
        let Some(object) = raw.as_object() else {
            return Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got: {raw}"
            )));
        };
        if !object.contains_key("status") {
            return Err(ParseError::MissingField("status".to_string()));
        }

        let fields = StatusFields::deserialize(&raw)?;

        Ok(Self {
            status: fields.status,
            color: fields.color,
            rgb: fields.rgb,
            raw,
        })
    }

    /// Returns the status flag as reported (`"ok"` when healthy).
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns `true` if the status flag is exactly `"ok"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Returns the current color name as the device reported it.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the current RGB triple, if reported.
    #[must_use]
    pub fn rgb(&self) -> Option<RgbColor> {
        self.rgb
    }

    /// Returns the full decoded body.
    #[must_use]
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }
}

/// One-line summary for display, `-` standing in for missing values.
impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.color {
            Some(color) => write!(f, "Color: {color}")?,
            None => f.write_str("Color: -")?,
        }
        match self.rgb {
            Some(rgb) => write!(f, "  RGB: {rgb}"),
            None => f.write_str("  RGB: -"),
        }
    }
}
