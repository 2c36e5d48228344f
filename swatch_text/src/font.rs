// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font description passed to measurers.

use alloc::sync::Arc;

/// The font a legend label is set in.
///
/// Only the inputs that change measured extents are carried here; color and
/// decoration belong to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Size in chart coordinate units (typically pixels).
    pub size: f64,
    /// Preferred family.
    pub family: FontFamily,
    /// CSS-style weight.
    pub weight: FontWeight,
    /// Upright or slanted.
    pub style: FontStyle,
}

impl Font {
    /// A regular sans-serif font of the given size.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Sets the family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

/// Legend labels default to a 10 unit system font.
impl Default for Font {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family, e.g. `"Helvetica Neue"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// The family as written in a CSS `font` shorthand.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style numeric weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `400`.
    pub const NORMAL: Self = Self(400);
    /// `700`.
    pub const BOLD: Self = Self(700);
}

/// Upright or slanted glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
}

impl FontStyle {
    /// The keyword used in a CSS `font` shorthand.
    #[must_use]
    pub fn as_css_keyword(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_font_is_ten_unit_sans() {
        let font = Font::default();
        assert_eq!(font.size, 10.0);
        assert_eq!(font.family.as_css_family(), "sans-serif");
        assert_eq!(font.weight, FontWeight::NORMAL);
    }

    #[test]
    fn named_family_round_trips_to_css() {
        let font = Font::new(12.0)
            .with_family(FontFamily::named("Inter"))
            .with_style(FontStyle::Italic);
        assert_eq!(font.family.as_css_family(), "Inter");
        assert_eq!(font.style.as_css_keyword(), "italic");
    }
}
