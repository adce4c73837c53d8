// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP plumbing for talking to the device.
//!
//! - [`Destination`]: normalized base URL of the device
//! - [`HttpConfig`]: destination and timeout, with an environment override
//! - [`HttpClient`]: one request/answer exchange per call
//!
//! HTTP is stateless here: every call is an independent request and no
//! connection state beyond `reqwest`'s pool is kept.

mod destination;
mod http;

pub use destination::Destination;
pub use http::{HttpClient, HttpConfig};
