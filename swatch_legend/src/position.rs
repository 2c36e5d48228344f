// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend placement: alignment, orientation, and the legacy position enum.
//!
//! [`PositionConfig`] is the canonical placement. [`LegendPosition`] is the
//! older single-value description kept for callers that still speak it; it is
//! derived from the config on demand and never stored.

/// Horizontal alignment of the legend relative to the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Left edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right edge.
    Right,
}

/// Vertical alignment of the legend relative to the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top edge.
    Top,
    /// Centered.
    Center,
    /// Bottom edge.
    #[default]
    Bottom,
}

/// Whether entries flow in a row (with wrapping) or stack in a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Entries flow left to right and wrap into lines.
    #[default]
    Horizontal,
    /// Entries stack top to bottom.
    Vertical,
}

/// Reading direction of each entry (form before or after its label).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Form, then label.
    #[default]
    LeftToRight,
    /// Label, then form.
    RightToLeft,
}

/// Canonical legend placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PositionConfig {
    /// Horizontal alignment.
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical alignment.
    pub vertical_alignment: VerticalAlignment,
    /// Entry flow.
    pub orientation: Orientation,
    /// Draw over the plot area instead of beside it.
    pub draw_inside: bool,
    /// Entry reading direction.
    pub direction: Direction,
}

impl PositionConfig {
    /// The legacy position this config corresponds to.
    ///
    /// Lossy: `direction` is ignored, and `draw_inside` only matters for
    /// top-aligned vertical legends.
    pub fn position(&self) -> LegendPosition {
        LegendPosition::from_config(self)
    }

    /// Applies a legacy position.
    ///
    /// Alignment, orientation and `draw_inside` are overwritten; `direction`
    /// keeps its current value.
    pub fn set_position(&mut self, position: LegendPosition) {
        use HorizontalAlignment as H;
        use LegendPosition as P;
        use VerticalAlignment as V;

        let (horizontal, vertical, orientation) = match position {
            P::LeftOfChart | P::LeftOfChartInside => (H::Left, V::Top, Orientation::Vertical),
            P::LeftOfChartCenter => (H::Left, V::Center, Orientation::Vertical),
            P::RightOfChart | P::RightOfChartInside => (H::Right, V::Top, Orientation::Vertical),
            P::RightOfChartCenter => (H::Right, V::Center, Orientation::Vertical),
            P::AboveChartLeft => (H::Left, V::Top, Orientation::Horizontal),
            P::AboveChartCenter => (H::Center, V::Top, Orientation::Horizontal),
            P::AboveChartRight => (H::Right, V::Top, Orientation::Horizontal),
            P::BelowChartLeft => (H::Left, V::Bottom, Orientation::Horizontal),
            P::BelowChartCenter => (H::Center, V::Bottom, Orientation::Horizontal),
            P::BelowChartRight => (H::Right, V::Bottom, Orientation::Horizontal),
            P::PiechartCenter => (H::Center, V::Center, Orientation::Vertical),
        };

        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self.orientation = orientation;
        self.draw_inside = matches!(position, P::LeftOfChartInside | P::RightOfChartInside);
    }

    /// Builder form of [`PositionConfig::set_position`].
    #[must_use]
    pub fn with_position(mut self, position: LegendPosition) -> Self {
        self.set_position(position);
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Legacy single-value legend position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegendPosition {
    /// Column to the right of the chart, top aligned.
    RightOfChart,
    /// Column to the right of the chart, vertically centered.
    RightOfChartCenter,
    /// Column inside the chart's top-right corner.
    RightOfChartInside,
    /// Column to the left of the chart, top aligned.
    LeftOfChart,
    /// Column to the left of the chart, vertically centered.
    LeftOfChartCenter,
    /// Column inside the chart's top-left corner.
    LeftOfChartInside,
    /// Row below the chart, left aligned.
    BelowChartLeft,
    /// Row below the chart, right aligned.
    BelowChartRight,
    /// Row below the chart, centered.
    BelowChartCenter,
    /// Row above the chart, left aligned.
    AboveChartLeft,
    /// Row above the chart, right aligned.
    AboveChartRight,
    /// Row above the chart, centered.
    AboveChartCenter,
    /// Column in the middle of a pie chart.
    PiechartCenter,
}

impl LegendPosition {
    /// Every legacy position.
    pub const ALL: [Self; 13] = [
        Self::RightOfChart,
        Self::RightOfChartCenter,
        Self::RightOfChartInside,
        Self::LeftOfChart,
        Self::LeftOfChartCenter,
        Self::LeftOfChartInside,
        Self::BelowChartLeft,
        Self::BelowChartRight,
        Self::BelowChartCenter,
        Self::AboveChartLeft,
        Self::AboveChartRight,
        Self::AboveChartCenter,
        Self::PiechartCenter,
    ];

    /// Derives the legacy position of a placement.
    pub fn from_config(config: &PositionConfig) -> Self {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;

        let h = config.horizontal_alignment;
        let v = config.vertical_alignment;
        match config.orientation {
            Orientation::Vertical if h == H::Center && v == V::Center => Self::PiechartCenter,
            Orientation::Horizontal => match (v, h) {
                (V::Top, H::Left) => Self::AboveChartLeft,
                (V::Top, H::Right) => Self::AboveChartRight,
                (V::Top, H::Center) => Self::AboveChartCenter,
                (_, H::Left) => Self::BelowChartLeft,
                (_, H::Right) => Self::BelowChartRight,
                (_, H::Center) => Self::BelowChartCenter,
            },
            Orientation::Vertical => {
                let inside = v == V::Top && config.draw_inside;
                match (h == H::Left, inside, v == V::Center) {
                    (true, true, _) => Self::LeftOfChartInside,
                    (true, false, true) => Self::LeftOfChartCenter,
                    (true, false, false) => Self::LeftOfChart,
                    (false, true, _) => Self::RightOfChartInside,
                    (false, false, true) => Self::RightOfChartCenter,
                    (false, false, false) => Self::RightOfChart,
                }
            }
        }
    }

    /// The placement this legacy position stands for, with a default
    /// direction.
    pub fn to_config(self) -> PositionConfig {
        PositionConfig::default().with_position(self)
    }
}

impl From<LegendPosition> for PositionConfig {
    fn from(position: LegendPosition) -> Self {
        position.to_config()
    }
}
