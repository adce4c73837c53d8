// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for LED control.
//!
//! # Types
//!
//! - [`RgbColor`] - RGB triple, each channel 0-255, encoded as `[r, g, b]`
//! - [`ColorName`] - Canonical (trimmed, lowercase) color name

mod color_name;
mod rgb_color;

pub use color_name::ColorName;
pub use rgb_color::RgbColor;
