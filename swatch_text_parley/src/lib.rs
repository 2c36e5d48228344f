// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement.
//!
//! [`ParleyTextMeasurer`] shapes each label with Parley and reports the
//! metrics of its first line, so legend layout sees the same advances the
//! renderer will later draw.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use parley::style::{FontFamily as ParleyFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, LayoutContext};
use swatch_text::{Font, FontFamily, FontStyle, TextMeasurer, TextMetrics};

/// A [`TextMeasurer`] that shapes text with Parley.
///
/// Font and layout contexts are reused across calls; they live behind
/// `RefCell`s because [`TextMeasurer::measure`] takes `&self`.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a measurer using Parley's system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the device pixel ratio used while shaping.
    ///
    /// Results are divided by the scale, so they stay in logical units.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley snaps layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn font_stack(family: &FontFamily) -> FontStack<'_> {
        FontStack::from(match family {
            FontFamily::Serif => ParleyFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFamily::Named(Cow::Borrowed(name.as_ref())),
        })
    }

    fn font_style(style: FontStyle) -> parley::FontStyle {
        match style {
            FontStyle::Normal => parley::FontStyle::Normal,
            FontStyle::Italic => parley::FontStyle::Italic,
            FontStyle::Oblique => parley::FontStyle::Oblique(None),
        }
    }

    /// Converts a font size to `f32`, mapping non-finite or negative sizes to 0.
    fn font_size(size: f64) -> f32 {
        if !size.is_finite() || size <= 0.0 {
            return 0.0;
        }
        if size >= f64::from(f32::MAX) {
            return f32::MAX;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Value is range-checked against f32::MAX above"
        )]
        {
            size as f32
        }
    }

    fn shape_first_line(&self, text: &str, font: &Font) -> TextMetrics {
        let scale = self.display_scale.max(1.0e-6);
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::font_size(font.size)));
        builder.push_default(StyleProperty::FontStack(Self::font_stack(&font.family)));
        builder.push_default(StyleProperty::FontStyle(Self::font_style(font.style)));
        builder.push_default(StyleProperty::FontWeight(parley::FontWeight::new(
            f32::from(font.weight.0),
        )));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return TextMetrics::ZERO;
        };
        let m = line.metrics();
        let scale = f64::from(scale);
        TextMetrics {
            advance_width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
            leading: f64::from(m.leading) / scale,
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        // Labels are single-line; anything after a newline is ignored.
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        self.shape_first_line(text, font)
    }
}
