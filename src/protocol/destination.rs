// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device base address.

use std::fmt;
use std::str::FromStr;

use crate::command::Endpoint;
use crate::error::Error;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Normalized base URL of the device: explicit scheme, no trailing slash.
///
/// Validation is deliberately shallow. Only the scheme is added when
/// missing; host and port are taken as given and are not resolved.
///
/// # Examples
///
/// ```
/// use rgbled_lib::protocol::Destination;
///
/// let dest = Destination::parse("192.168.10.2:80").unwrap();
/// assert_eq!(dest.as_str(), "http://192.168.10.2:80");
///
/// let dest = Destination::parse("https://led.local/").unwrap();
/// assert_eq!(dest.as_str(), "https://led.local");
///
/// assert!(Destination::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    /// Normalizes operator input into a destination.
    ///
    /// Surrounding whitespace and trailing slashes are removed, and
    /// `http://` is prepended unless the input already starts with
    /// `http://` or `https://` (any case).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDestination` if nothing but a scheme (or
    /// nothing at all) remains.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        let (scheme, rest) = split_scheme(trimmed);
        let host = rest.trim_end_matches('/');

        if host.is_empty() {
            return Err(Error::InvalidDestination(if trimmed.is_empty() {
                "empty address".to_string()
            } else {
                format!("no host in {trimmed:?}")
            }));
        }

        Ok(Self(format!("{scheme}{host}")))
    }

    /// Returns the normalized URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the destination uses HTTPS.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.0.starts_with(HTTPS_PREFIX)
    }

    /// Builds the full URL of an endpoint.
    ///
    /// ```
    /// use rgbled_lib::command::Endpoint;
    /// use rgbled_lib::protocol::Destination;
    ///
    /// let dest = Destination::parse("http://10.0.0.7/").unwrap();
    /// assert_eq!(dest.url_for(Endpoint::Ack), "http://10.0.0.7/ack");
    /// ```
    #[must_use]
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.0, endpoint.path())
    }
}

fn split_scheme(input: &str) -> (&'static str, &str) {
    for scheme in [HTTP_PREFIX, HTTPS_PREFIX] {
        if input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        {
            return (scheme, &input[scheme.len()..]);
        }
    }
    (HTTP_PREFIX, input)
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Destination {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
