// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `rgbled_lib` - A Rust library to control a networked RGB LED.
//!
//! The device (typically an ESP32 with Ethernet) exposes a tiny HTTP API.
//! This library encodes that contract, owns the device address and turns
//! every transport outcome into a typed result.
//!
//! # Supported Operations
//!
//! - **Named colors**: turn the LED on with a color from the [`Palette`]
//! - **Raw RGB**: set any `(r, g, b)` triple
//! - **Off**: switch the LED off
//! - **Ack / status**: read the confirmation text and the current state
//! - **Destination**: change the device address at runtime
//!
//! # Quick Start
//!
//! ```no_run
//! use rgbled_lib::DeviceClient;
//!
//! #[tokio::main]
//! async fn main() -> rgbled_lib::Result<()> {
//!     // ESP32_URL or http://192.168.10.2:80
//!     let client = DeviceClient::from_env()?;
//!
//!     for name in client.color_names() {
//!         println!("available: {name}");
//!     }
//!
//!     println!("{}", client.turn_on_color("azul").await?);
//!     println!("{}", client.set_rgb(255, 128, 0).await?);
//!     println!("{}", client.fetch_status().await?);
//!     println!("{}", client.turn_off().await?);
//!
//!     client.set_destination("192.168.10.3")?;
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod error;
mod palette;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Endpoint, SetColorPayload};
pub use device::{DeviceClient, DeviceClientBuilder};
pub use error::{Error, ParseError, Result, ValueError};
pub use palette::Palette;
pub use protocol::{Destination, HttpConfig};
pub use response::DeviceStatus;
pub use types::{ColorName, RgbColor};
