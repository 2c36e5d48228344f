// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement contract for legend layout.
//!
//! Legend layout needs two things from the text stack: the box a label
//! occupies in a given font, and the height of one line in that font. Shaping
//! and glyph rasterization stay with the renderer, so layout code only talks
//! to the small [`TextMeasurer`] trait defined here.
//!
//! Backends:
//! - [`HeuristicTextMeasurer`]: fixed em-fraction estimate, no font data.
//! - [`CachingTextMeasurer`]: memoizes any other measurer.
//! - `swatch_text_parley` and `swatch_text_web` provide shaping-aware and
//!   browser-backed implementations.

#![no_std]

extern crate alloc;

mod cache;
mod font;

use alloc::boxed::Box;

pub use cache::CachingTextMeasurer;
pub use font::{Font, FontFamily, FontStyle, FontWeight};

/// The string measured by the default [`TextMeasurer::line_height`].
///
/// It carries both an ascender and a descender so the measured line covers
/// the full vertical extent of typical labels.
pub const LINE_HEIGHT_PROBE: &str = "Mg";

/// Measures single-line label text.
///
/// Implementations must be deterministic for a fixed `(text, font)` pair for
/// at least the duration of one layout pass; layout code is allowed to assume
/// so and may memoize results (see [`CachingTextMeasurer`]).
pub trait TextMeasurer {
    /// Measure `text` as a single line set in `font`.
    fn measure(&self, text: &str, font: &Font) -> TextMetrics;

    /// Height of one line of text in `font`.
    fn line_height(&self, font: &Font) -> f64 {
        self.measure(LINE_HEIGHT_PROBE, font).line_height()
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        (**self).measure(text, font)
    }

    fn line_height(&self, font: &Font) -> f64 {
        (**self).line_height(font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        (**self).measure(text, font)
    }

    fn line_height(&self, font: &Font) -> f64 {
        (**self).line_height(font)
    }
}

/// Metrics of one measured line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Distance from the baseline up to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from the baseline down to the bottom of typical glyphs.
    pub descent: f64,
    /// Extra spacing beyond `ascent + descent`.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty line.
    pub const ZERO: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }

    /// Returns the `(width, height)` box of the line.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.advance_width, self.line_height())
    }
}

/// Estimates metrics from the font size alone.
///
/// Every character advances 0.6em; ascent is 0.8em and descent 0.2em, so a
/// line is exactly one em tall. Good enough for tests and first-pass layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        let em = font.size.max(0.0);
        TextMetrics {
            advance_width: 0.6 * em * text.chars().count() as f64,
            ascent: 0.8 * em,
            descent: 0.2 * em,
            leading: 0.0,
        }
    }

    fn line_height(&self, font: &Font) -> f64 {
        font.size.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_chars() {
        let font = Font::new(10.0);
        let m = HeuristicTextMeasurer.measure("abcd", &font);
        assert!((m.advance_width - 24.0).abs() < 1e-9, "0.6em * 4 chars");
        assert!((m.line_height() - 10.0).abs() < 1e-9, "one em tall");
    }

    #[test]
    fn default_line_height_uses_probe() {
        struct Fixed;
        impl TextMeasurer for Fixed {
            fn measure(&self, text: &str, _font: &Font) -> TextMetrics {
                assert_eq!(text, LINE_HEIGHT_PROBE, "only the probe is measured");
                TextMetrics {
                    advance_width: 1.0,
                    ascent: 7.0,
                    descent: 2.0,
                    leading: 1.5,
                }
            }
        }

        assert_eq!(Fixed.line_height(&Font::default()), 10.5);
    }

    #[test]
    fn references_and_boxes_forward() {
        let font = Font::new(20.0);
        let boxed: Box<dyn TextMeasurer> = Box::new(HeuristicTextMeasurer);
        assert_eq!(boxed.line_height(&font), 20.0);
        assert_eq!(
            (&HeuristicTextMeasurer).measure("x", &font),
            HeuristicTextMeasurer.measure("x", &font)
        );
    }
}
