// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend entries and the automatic/custom entry source.
//!
//! An entry is a swatch ("form") and a label, either of which may be absent:
//! - an entry without a label is a *group* entry; its form stacks next to the
//!   forms around it and the label that eventually follows, and
//! - an entry without a color draws no form, but its label still takes space.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::error::LegendError;

/// One legend item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendEntry {
    /// Form color, or `None` to draw no form.
    pub color: Option<Color>,
    /// Label text, or `None` to stack this form with the next entries.
    pub label: Option<String>,
}

impl LegendEntry {
    /// Creates an entry from its optional parts.
    pub fn new(color: Option<Color>, label: Option<String>) -> Self {
        Self { color, label }
    }

    /// A form in `color` followed by `label`.
    pub fn labeled(label: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            label: Some(label.into()),
        }
    }

    /// A label with no form in front of it.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            color: None,
            label: Some(label.into()),
        }
    }

    /// A form-only entry that stacks with its neighbours.
    pub fn group(color: Color) -> Self {
        Self {
            color: Some(color),
            label: None,
        }
    }

    /// Returns `true` if this entry has no label.
    pub fn is_group(&self) -> bool {
        self.label.is_none()
    }

    /// Returns `true` if a form is drawn for this entry.
    pub fn draws_form(&self) -> bool {
        self.color.is_some()
    }
}

/// Pairs parallel color and label lists into entries.
///
/// Fails with [`LegendError::InvalidArgument`] if the lists differ in length.
pub fn entries_from_parts(
    colors: Vec<Option<Color>>,
    labels: Vec<Option<String>>,
) -> Result<Vec<LegendEntry>, LegendError> {
    if colors.len() != labels.len() {
        log::debug!(
            "rejecting legend entries: {} colors vs {} labels",
            colors.len(),
            labels.len()
        );
        return Err(LegendError::InvalidArgument {
            colors: colors.len(),
            labels: labels.len(),
        });
    }
    Ok(colors
        .into_iter()
        .zip(labels)
        .map(|(color, label)| LegendEntry { color, label })
        .collect())
}

/// Who owns the primary entry list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendMode {
    /// Entries are recomputed from chart data before each layout pass.
    #[default]
    Auto,
    /// Entries were set explicitly and must not be recomputed.
    Custom,
}

/// Primary and extra entries plus the automatic/custom flag.
///
/// The flag is advisory: it tells the data-set analyzer populating automatic
/// entries whether it may overwrite [`LegendEntries::primary`]. Layout never
/// reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendEntries {
    primary: Vec<LegendEntry>,
    extra: Vec<LegendEntry>,
    mode: LegendMode,
}

impl LegendEntries {
    /// An empty, automatic entry source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary entries.
    pub fn primary(&self) -> &[LegendEntry] {
        &self.primary
    }

    /// Entries appended after the primary ones.
    pub fn extra(&self) -> &[LegendEntry] {
        &self.extra
    }

    /// Current mode.
    pub fn mode(&self) -> LegendMode {
        self.mode
    }

    /// Returns `true` if the primary entries were set by the caller.
    pub fn is_custom(&self) -> bool {
        self.mode == LegendMode::Custom
    }

    /// Label of the primary entry at `index`, if it exists and has one.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.primary.get(index)?.label.as_deref()
    }

    /// Replaces the primary entries without changing the mode.
    ///
    /// This is how the data-set analyzer fills an automatic legend.
    pub fn set_entries(&mut self, entries: Vec<LegendEntry>) {
        self.primary = entries;
    }

    /// Sets custom primary entries from parallel lists and switches to
    /// [`LegendMode::Custom`].
    ///
    /// On a length mismatch nothing changes.
    pub fn set_custom(
        &mut self,
        colors: Vec<Option<Color>>,
        labels: Vec<Option<String>>,
    ) -> Result<(), LegendError> {
        let entries = entries_from_parts(colors, labels)?;
        self.set_custom_entries(entries);
        Ok(())
    }

    /// Sets custom primary entries and switches to [`LegendMode::Custom`].
    pub fn set_custom_entries(&mut self, entries: Vec<LegendEntry>) {
        log::debug!("legend switched to {} custom entries", entries.len());
        self.primary = entries;
        self.mode = LegendMode::Custom;
    }

    /// Switches back to [`LegendMode::Auto`].
    ///
    /// The current entries stay until the analyzer overwrites them.
    pub fn reset_custom(&mut self) {
        log::debug!("legend reset to automatic entries");
        self.mode = LegendMode::Auto;
    }

    /// Sets the extra entries from parallel lists. Allowed in either mode.
    ///
    /// On a length mismatch nothing changes.
    pub fn set_extra(
        &mut self,
        colors: Vec<Option<Color>>,
        labels: Vec<Option<String>>,
    ) -> Result<(), LegendError> {
        self.extra = entries_from_parts(colors, labels)?;
        Ok(())
    }

    /// Sets the extra entries.
    pub fn set_extra_entries(&mut self, entries: Vec<LegendEntry>) {
        self.extra = entries;
    }

    /// Primary entries followed by extra entries.
    ///
    /// This is the sequence layout expects.
    pub fn merged(&self) -> Vec<LegendEntry> {
        let mut out = Vec::with_capacity(self.primary.len() + self.extra.len());
        out.extend_from_slice(&self.primary);
        out.extend_from_slice(&self.extra);
        out
    }
}
