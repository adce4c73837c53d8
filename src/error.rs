// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `rgbled_lib` library.
//!
//! Every operation that talks to the device returns one of the [`Error`]
//! kinds below. Nothing is retried or logged on the caller's behalf: the
//! caller decides how to present a failure.

use thiserror::Error;

use crate::command::Endpoint;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The destination string is empty or names no host.
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// Connection refused, timeout exceeded, or another network failure.
    #[error("transport error on {endpoint}: {source}")]
    Transport {
        /// The endpoint the request was sent to.
        endpoint: Endpoint,
        /// The underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The device answered with a non-success status.
    #[error("device rejected {endpoint}: {reason}")]
    DeviceRejected {
        /// The endpoint the request was sent to.
        endpoint: Endpoint,
        /// HTTP status code of the answer.
        status: u16,
        /// Human-readable description of the rejection.
        reason: String,
    },

    /// The device answer could not be decoded.
    #[error("protocol error on {endpoint}: {source}")]
    Protocol {
        /// The endpoint the request was sent to.
        endpoint: Endpoint,
        /// What went wrong while decoding.
        #[source]
        source: ParseError,
    },

    /// The underlying HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A value given to a constrained type was invalid.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

impl Error {
    /// Returns the endpoint involved, if the error came from an exchange.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::DeviceRejected { endpoint, .. }
            | Self::Protocol { endpoint, .. } => Some(*endpoint),
            Self::InvalidDestination(_) | Self::Client(_) | Self::Value(_) => None,
        }
    }

    /// Returns `true` if the request never got an HTTP answer in time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A request timeout of zero was configured.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Errors related to decoding device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
