// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type and its wire encoding.
//!
//! The device firmware exchanges colors as a JSON array `[r, g, b]`, so
//! [`RgbColor`] serializes to and from exactly that shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use rgbled_lib::types::RgbColor;
///
/// let color = RgbColor::new(255, 165, 0);
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.green(), 165);
/// assert_eq!(color.blue(), 0);
///
/// let red = RgbColor::new(255, 0, 0);
///
/// // Wire format is a plain array
/// assert_eq!(serde_json::to_string(&red).unwrap(), "[255,0,0]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from wide integer components, checking each one is
    /// within 0-255.
    ///
    /// Useful when components come from form fields or other untyped input.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for the first component outside 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbled_lib::types::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_components(10, 20, 30).unwrap(), RgbColor::new(10, 20, 30));
    /// assert!(RgbColor::from_components(256, 0, 0).is_err());
    /// assert!(RgbColor::from_components(0, -1, 0).is_err());
    /// ```
    pub fn from_components(red: i64, green: i64, blue: i64) -> Result<Self, ValueError> {
        Ok(Self::new(channel(red)?, channel(green)?, channel(blue)?))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the components as an `[r, g, b]` array.
    #[must_use]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns the color as a hex string without the hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the color as a hex string with the hash prefix.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{}", self.to_hex())
    }

    /// Returns the color as a CSS `rgb()` function, for button backgrounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbled_lib::types::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(128, 0, 128).to_css(), "rgb(128,0,128)");
    /// ```
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Formats as `(r,g,b)`, the notation the device uses in its ack text.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(color: RgbColor) -> Self {
        color.to_array()
    }
}

fn channel(value: i64) -> Result<u8, ValueError> {
    u8::try_from(value).map_err(|_| ValueError::OutOfRange {
        min: 0,
        max: 255,
        actual: value,
    })
}
