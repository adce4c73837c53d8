// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical color names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color name in canonical form: surrounding whitespace removed and
/// lowercased.
///
/// Every constructor normalizes, so two names that differ only in case or
/// padding compare equal.
///
/// # Examples
///
/// ```
/// use rgbled_lib::types::ColorName;
///
/// let name = ColorName::new("  ROJO ");
/// assert_eq!(name.as_str(), "rojo");
/// assert_eq!(name, ColorName::from("Rojo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ColorName(String);

impl ColorName {
    /// Creates a canonical color name from arbitrary input.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name is empty after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name with its first letter uppercased, for labels.
    ///
    /// ```
    /// use rgbled_lib::types::ColorName;
    ///
    /// assert_eq!(ColorName::new("amarillo").capitalized(), "Amarillo");
    /// ```
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColorName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<ColorName> for String {
    fn from(name: ColorName) -> Self {
        name.0
    }
}

impl PartialEq<str> for ColorName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColorName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
