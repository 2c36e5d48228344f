// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend styling and spacing configuration.

use peniko::Color;
use peniko::color::palette::css;
use swatch_text::Font;

/// Shape of the swatch drawn in front of each label.
///
/// Layout only reserves [`LegendStyle::form_size`] for it; the shape itself
/// is the renderer's business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendForm {
    /// A filled square.
    #[default]
    Square,
    /// A filled circle.
    Circle,
    /// A horizontal line stroked with [`LegendStyle::form_line_width`].
    Line,
}

/// Visual parameters of a legend.
///
/// All distances are in chart coordinate units.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendStyle {
    /// Label font.
    pub font: Font,
    /// Label color.
    pub text_color: Color,
    /// Swatch shape.
    pub form: LegendForm,
    /// Swatch edge length.
    pub form_size: f64,
    /// Stroke width for [`LegendForm::Line`].
    pub form_line_width: f64,
    /// Horizontal gap between entries on one line.
    pub x_entry_space: f64,
    /// Vertical gap between lines/rows.
    pub y_entry_space: f64,
    /// Gap between a swatch and its label.
    pub form_to_text_space: f64,
    /// Gap between stacked swatches of a group.
    pub stack_space: f64,
    /// Fraction (0..=1) of the content width a horizontal legend may use
    /// before wrapping.
    pub max_size_percent: f64,
    /// Whether horizontal legends wrap into several lines.
    pub word_wrap_enabled: bool,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            text_color: css::BLACK,
            form: LegendForm::Square,
            form_size: 8.0,
            form_line_width: 1.5,
            x_entry_space: 6.0,
            y_entry_space: 0.0,
            form_to_text_space: 5.0,
            stack_space: 3.0,
            max_size_percent: 0.95,
            word_wrap_enabled: true,
        }
    }
}

impl LegendStyle {
    /// Creates the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label font.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the label color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the swatch shape.
    #[must_use]
    pub fn with_form(mut self, form: LegendForm) -> Self {
        self.form = form;
        self
    }

    /// Sets the swatch size.
    #[must_use]
    pub fn with_form_size(mut self, form_size: f64) -> Self {
        self.form_size = form_size.max(0.0);
        self
    }

    /// Sets the line-form stroke width.
    #[must_use]
    pub fn with_form_line_width(mut self, width: f64) -> Self {
        self.form_line_width = width.max(0.0);
        self
    }

    /// Sets the horizontal gap between entries.
    #[must_use]
    pub fn with_x_entry_space(mut self, space: f64) -> Self {
        self.x_entry_space = space.max(0.0);
        self
    }

    /// Sets the vertical gap between rows.
    #[must_use]
    pub fn with_y_entry_space(mut self, space: f64) -> Self {
        self.y_entry_space = space.max(0.0);
        self
    }

    /// Sets the swatch-to-label gap.
    #[must_use]
    pub fn with_form_to_text_space(mut self, space: f64) -> Self {
        self.form_to_text_space = space.max(0.0);
        self
    }

    /// Sets the gap between stacked swatches.
    #[must_use]
    pub fn with_stack_space(mut self, space: f64) -> Self {
        self.stack_space = space.max(0.0);
        self
    }

    /// Sets the usable fraction of the content width, clamped to `0..=1`.
    #[must_use]
    pub fn with_max_size_percent(mut self, percent: f64) -> Self {
        self.max_size_percent = percent.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables wrapping of horizontal legends.
    #[must_use]
    pub fn with_word_wrap(mut self, enabled: bool) -> Self {
        self.word_wrap_enabled = enabled;
        self
    }
}
