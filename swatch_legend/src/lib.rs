// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart legend model and layout.
//!
//! This crate decides how much room a legend needs and how its entries are
//! arranged; drawing is left to the renderer.
//!
//! - [`LegendEntry`] / [`LegendEntries`]: swatch + label items, and whether
//!   they are computed from chart data or set by the caller.
//! - [`LegendStyle`]: sizes and gaps.
//! - [`PositionConfig`] / [`LegendPosition`]: placement, with the legacy
//!   single-value position as a derived view.
//! - [`LegendLayout`]: stacked (vertical) and word-wrapped (horizontal)
//!   measurement.
//!
//! Text is measured through [`swatch_text::TextMeasurer`], so any backend
//! (heuristic, Parley, browser canvas) can drive layout.
//!
//! ```
//! use peniko::color::palette::css;
//! use swatch_legend::{Legend, LegendEntry};
//! use swatch_text::HeuristicTextMeasurer;
//!
//! let mut legend = Legend::new();
//! legend.entries_mut().set_entries(vec![
//!     LegendEntry::labeled("Revenue", css::STEEL_BLUE),
//!     LegendEntry::labeled("Cost", css::TOMATO),
//! ]);
//!
//! let entries = legend.entries().merged();
//! let layout = legend.calculate_dimensions(&entries, &HeuristicTextMeasurer, 400.0);
//! assert_eq!(layout.line_count(), 1);
//! ```

#![no_std]

extern crate alloc;

mod entry;
mod error;
mod layout;
mod legend;
mod position;
mod style;

pub use entry::{LegendEntries, LegendEntry, LegendMode, entries_from_parts};
pub use error::LegendError;
pub use layout::{LegendLayout, max_entry_size};
pub use legend::Legend;
pub use position::{
    Direction, HorizontalAlignment, LegendPosition, Orientation, PositionConfig,
    VerticalAlignment,
};
pub use style::{LegendForm, LegendStyle};
