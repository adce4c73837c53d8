// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named color table offered to the operator.

use crate::types::{ColorName, RgbColor};

/// Built-in colors known to the device firmware, in button order.
const DEFAULT_COLORS: [(&str, RgbColor); 8] = [
    ("rojo", RgbColor::new(255, 0, 0)),
    ("naranja", RgbColor::new(255, 165, 0)),
    ("amarillo", RgbColor::new(255, 255, 0)),
    ("verde", RgbColor::new(0, 255, 0)),
    ("cian", RgbColor::new(0, 255, 255)),
    ("azul", RgbColor::new(0, 0, 255)),
    ("violeta", RgbColor::new(128, 0, 128)),
    ("blanco", RgbColor::new(255, 255, 255)),
];

/// An immutable, ordered mapping from color name to RGB triple.
///
/// Lookups are case-insensitive and ignore surrounding whitespace.
/// Iteration follows construction order so rendered buttons stay stable.
/// If a name appears more than once at construction, it keeps its first
/// position and takes the last value.
///
/// # Examples
///
/// ```
/// use rgbled_lib::Palette;
/// use rgbled_lib::types::RgbColor;
///
/// let palette = Palette::default();
/// assert_eq!(palette.lookup(" ROJO "), Some(RgbColor::new(255, 0, 0)));
/// assert_eq!(palette.lookup("notacolor"), None);
///
/// let custom: Palette = [("Warm", RgbColor::new(255, 180, 100))].into_iter().collect();
/// assert_eq!(custom.names().map(|n| n.as_str()).collect::<Vec<_>>(), ["warm"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(ColorName, RgbColor)>,
}

impl Palette {
    /// Builds a palette from `(name, rgb)` pairs.
    #[must_use]
    pub fn new<N, I>(entries: I) -> Self
    where
        N: Into<ColorName>,
        I: IntoIterator<Item = (N, RgbColor)>,
    {
        let mut palette = Self {
            entries: Vec::new(),
        };
        for (name, rgb) in entries {
            let name = name.into();
            match palette.entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = rgb,
                None => palette.entries.push((name, rgb)),
            }
        }
        palette
    }

    /// Returns the RGB triple for `name`, or `None` if the palette has no
    /// such color.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<RgbColor> {
        let name = ColorName::new(name);
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, rgb)| *rgb)
    }

    /// Returns `true` if `name` is in the palette.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the color names in construction order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &ColorName> + Clone + '_ {
        self.entries.iter().map(|(name, _)| name)
    }

    /// Returns `(name, rgb)` pairs in construction order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&ColorName, RgbColor)> + Clone + '_ {
        self.entries.iter().map(|(name, rgb)| (name, *rgb))
    }

    /// Returns the number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}

impl<N: Into<ColorName>> FromIterator<(N, RgbColor)> for Palette {
    fn from_iter<I: IntoIterator<Item = (N, RgbColor)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
