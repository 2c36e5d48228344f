// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The legend component: entries, style and placement in one value.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Size, Vec2};
use peniko::Color;
use swatch_text::TextMeasurer;

use crate::entry::{LegendEntries, LegendEntry};
use crate::error::LegendError;
use crate::layout::LegendLayout;
use crate::position::{LegendPosition, PositionConfig};
use crate::style::LegendStyle;

/// A chart legend.
///
/// Holds the entry source, styling and placement, plus the layout of the
/// most recent [`Legend::calculate_dimensions`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Whether the legend is shown at all.
    pub enabled: bool,
    /// Offset from the anchor edge chosen by [`Legend::position`].
    pub offset: Vec2,
    /// Styling and spacing.
    pub style: LegendStyle,
    /// Placement.
    pub position: PositionConfig,
    entries: LegendEntries,
    layout: LegendLayout,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            enabled: true,
            offset: Vec2::new(5.0, 3.0),
            style: LegendStyle::default(),
            position: PositionConfig::default(),
            entries: LegendEntries::default(),
            layout: LegendLayout::default(),
        }
    }
}

impl Legend {
    /// An enabled legend with automatic entries and default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// A legend whose primary entries are the given parallel lists.
    ///
    /// The legend stays in automatic mode, as if the data-set analyzer had
    /// produced these entries.
    pub fn with_entries(
        colors: Vec<Option<Color>>,
        labels: Vec<Option<String>>,
    ) -> Result<Self, LegendError> {
        let mut legend = Self::new();
        legend
            .entries
            .set_entries(crate::entry::entries_from_parts(colors, labels)?);
        Ok(legend)
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: LegendStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the placement.
    #[must_use]
    pub fn with_position(mut self, position: PositionConfig) -> Self {
        self.position = position;
        self
    }

    /// Sets the placement from a legacy position, keeping the direction.
    #[must_use]
    pub fn with_legacy_position(mut self, position: LegendPosition) -> Self {
        self.position.set_position(position);
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// The legacy position derived from [`Legend::position`].
    pub fn legacy_position(&self) -> LegendPosition {
        self.position.position()
    }

    /// The entry source.
    pub fn entries(&self) -> &LegendEntries {
        &self.entries
    }

    /// Mutable access to the entry source.
    pub fn entries_mut(&mut self) -> &mut LegendEntries {
        &mut self.entries
    }

    /// Shorthand for [`LegendEntries::set_custom`].
    pub fn set_custom(
        &mut self,
        colors: Vec<Option<Color>>,
        labels: Vec<Option<String>>,
    ) -> Result<(), LegendError> {
        self.entries.set_custom(colors, labels)
    }

    /// Shorthand for [`LegendEntries::reset_custom`].
    pub fn reset_custom(&mut self) {
        self.entries.reset_custom();
    }

    /// Shorthand for [`LegendEntries::set_extra`].
    pub fn set_extra(
        &mut self,
        colors: Vec<Option<Color>>,
        labels: Vec<Option<String>>,
    ) -> Result<(), LegendError> {
        self.entries.set_extra(colors, labels)
    }

    /// Lays out `entries` with this legend's style and orientation.
    ///
    /// `entries` is the full sequence to show: normally
    /// `self.entries().merged()`, taken after the analyzer has refreshed the
    /// automatic entries. `content_width` is the chart content width before
    /// [`LegendStyle::max_size_percent`] is applied.
    ///
    /// The result is kept until the next call; see [`Legend::layout`].
    pub fn calculate_dimensions<M: TextMeasurer + ?Sized>(
        &mut self,
        entries: &[LegendEntry],
        measurer: &M,
        content_width: f64,
    ) -> &LegendLayout {
        self.layout.recompute(
            entries,
            &self.style,
            self.position.orientation,
            measurer,
            content_width,
        );
        &self.layout
    }

    /// The layout from the last [`Legend::calculate_dimensions`] call.
    pub fn layout(&self) -> &LegendLayout {
        &self.layout
    }

    /// Total size from the last layout.
    pub fn needed_size(&self) -> Size {
        self.layout.needed
    }
}
