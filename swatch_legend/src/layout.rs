// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend measurement: how much space entries need and where lines break.
//!
//! Two engines share one result type:
//! - **Vertical** legends stack one row per label. Group entries (no label)
//!   put their forms side by side in front of the label that follows.
//! - **Horizontal** legends pack entries into lines greedily. A *unit* is a
//!   labeled entry together with any group entries right before it; units are
//!   never split, so wrapping only ever happens between units.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Size;
use smallvec::SmallVec;
use swatch_text::{Font, TextMeasurer};

use crate::entry::LegendEntry;
use crate::position::Orientation;
use crate::style::LegendStyle;

/// The measured layout of a legend.
///
/// `label_sizes` and `break_before` always have one slot per entry of the
/// last computation. `break_before` and `line_sizes` are only populated for
/// [`Orientation::Horizontal`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendLayout {
    /// Total footprint.
    pub needed: Size,
    /// Widest entry (label plus form and gap) and tallest label.
    pub text_max: Size,
    /// Measured box of each entry's label; zero for group entries.
    pub label_sizes: Vec<Size>,
    /// `true` where a new line starts at that entry.
    pub break_before: Vec<bool>,
    /// Size of each produced line, in order.
    pub line_sizes: SmallVec<[Size; 4]>,
}

impl LegendLayout {
    /// Computes a fresh layout.
    ///
    /// `content_width` is the width the chart can give the legend before
    /// [`LegendStyle::max_size_percent`] is applied.
    pub fn compute<M: TextMeasurer + ?Sized>(
        entries: &[LegendEntry],
        style: &LegendStyle,
        orientation: Orientation,
        measurer: &M,
        content_width: f64,
    ) -> Self {
        let mut layout = Self::default();
        layout.recompute(entries, style, orientation, measurer, content_width);
        layout
    }

    /// Recomputes in place, reusing this layout's allocations.
    ///
    /// Per-entry arrays are resized to `entries.len()` first, so nothing from
    /// an earlier, longer entry list survives.
    pub fn recompute<M: TextMeasurer + ?Sized>(
        &mut self,
        entries: &[LegendEntry],
        style: &LegendStyle,
        orientation: Orientation,
        measurer: &M,
        content_width: f64,
    ) {
        let count = entries.len();
        self.label_sizes.clear();
        self.label_sizes.resize(count, Size::ZERO);
        self.break_before.clear();
        self.break_before.resize(count, false);
        self.line_sizes.clear();

        for (slot, entry) in self.label_sizes.iter_mut().zip(entries) {
            if let Some(label) = &entry.label {
                *slot = measure_label(measurer, label, &style.font);
            }
        }
        self.text_max = entry_extent(
            entries
                .iter()
                .zip(&self.label_sizes)
                .map(|(entry, size)| entry.label.as_ref().map(|_| *size)),
            style,
        );

        let line_height = measurer.line_height(&style.font);
        self.needed = match orientation {
            Orientation::Vertical => self.stack_rows(entries, style, line_height),
            Orientation::Horizontal => self.wrap_lines(
                entries,
                style,
                line_height,
                content_width * style.max_size_percent,
            ),
        };

        log::debug!(
            "legend layout ({orientation:?}, {count} entries): {}x{}",
            self.needed.width,
            self.needed.height
        );
    }

    /// Total width needed.
    pub fn needed_width(&self) -> f64 {
        self.needed.width
    }

    /// Total height needed.
    pub fn needed_height(&self) -> f64 {
        self.needed.height
    }

    /// Width of the widest entry, including its form and gap.
    pub fn text_width_max(&self) -> f64 {
        self.text_max.width
    }

    /// Height of the tallest label.
    pub fn text_height_max(&self) -> f64 {
        self.text_max.height
    }

    /// Number of horizontal lines produced.
    pub fn line_count(&self) -> usize {
        self.line_sizes.len()
    }

    fn stack_rows(&self, entries: &[LegendEntry], style: &LegendStyle, line_height: f64) -> Size {
        let row_advance = line_height + style.y_entry_space;
        let last = entries.len().saturating_sub(1);

        let mut max_width = 0.0_f64;
        let mut max_height = 0.0_f64;
        let mut run = 0.0_f64;
        let mut stacked = false;

        for (i, (entry, label_size)) in entries.iter().zip(&self.label_sizes).enumerate() {
            if !stacked {
                run = 0.0;
            }

            if entry.is_group() {
                // Group slots reserve a form's width even without a color.
                if stacked {
                    run += style.stack_space;
                }
                run += style.form_size;
                stacked = true;
            } else {
                if entry.draws_form() {
                    if stacked {
                        run += style.stack_space;
                    }
                    run += style.form_size;
                }

                if stacked {
                    // The group's forms and this label make one row.
                    max_width = max_width.max(run);
                    max_height += row_advance;
                    run = 0.0;
                    stacked = false;
                } else if entry.draws_form() {
                    run += style.form_to_text_space;
                }

                run += label_size.width;

                if i < last {
                    max_height += row_advance;
                }
            }

            max_width = max_width.max(run);
        }

        Size::new(max_width, max_height)
    }

    fn wrap_lines(
        &mut self,
        entries: &[LegendEntry],
        style: &LegendStyle,
        line_height: f64,
        available: f64,
    ) -> Size {
        let last = entries.len().saturating_sub(1);

        let mut max_line_width = 0.0_f64;
        let mut line_width = 0.0_f64;
        let mut required = 0.0_f64;
        // First entry of the group being accumulated, if any.
        let mut stacked_start: Option<usize> = None;

        for (i, entry) in entries.iter().enumerate() {
            if stacked_start.is_some() {
                required += style.stack_space;
            } else {
                required = 0.0;
            }

            if entry.is_group() {
                if entry.draws_form() {
                    required += style.form_size;
                }
                stacked_start.get_or_insert(i);
            } else {
                if entry.draws_form() {
                    required += style.form_to_text_space + style.form_size;
                }
                required += self.label_sizes[i].width;
            }

            if !entry.is_group() || i == last {
                let spacing = if line_width == 0.0 {
                    0.0
                } else {
                    style.x_entry_space
                };

                if !style.word_wrap_enabled
                    || line_width == 0.0
                    || available - line_width >= spacing + required
                {
                    line_width += spacing + required;
                } else {
                    self.close_line(line_width, line_height, &mut max_line_width);
                    self.break_before[stacked_start.unwrap_or(i)] = true;
                    line_width = required;
                }

                if i == last {
                    self.close_line(line_width, line_height, &mut max_line_width);
                }
            }

            if !entry.is_group() {
                stacked_start = None;
            }
        }

        let lines = self.line_sizes.len();
        Size::new(
            max_line_width,
            line_height * lines as f64 + style.y_entry_space * lines.saturating_sub(1) as f64,
        )
    }

    fn close_line(&mut self, width: f64, line_height: f64, max_line_width: &mut f64) {
        log::trace!("legend line {} closed at width {width}", self.line_sizes.len());
        self.line_sizes.push(Size::new(width, line_height));
        *max_line_width = max_line_width.max(width);
    }
}

/// Size of the widest entry and the tallest label.
///
/// Group entries are skipped, so a list made only of groups measures zero
/// text. The width includes [`LegendStyle::form_size`] and
/// [`LegendStyle::form_to_text_space`]; the height is the label height alone.
pub fn max_entry_size<M: TextMeasurer + ?Sized>(
    entries: &[LegendEntry],
    style: &LegendStyle,
    measurer: &M,
) -> Size {
    entry_extent(
        entries.iter().map(|entry| {
            entry
                .label
                .as_deref()
                .map(|label| measure_label(measurer, label, &style.font))
        }),
        style,
    )
}

fn entry_extent(labels: impl Iterator<Item = Option<Size>>, style: &LegendStyle) -> Size {
    let mut max_w = 0.0_f64;
    let mut max_h = 0.0_f64;
    for size in labels.flatten() {
        max_w = max_w.max(size.width);
        max_h = max_h.max(size.height);
    }
    Size::new(max_w + style.form_size + style.form_to_text_space, max_h)
}

fn measure_label<M: TextMeasurer + ?Sized>(measurer: &M, label: &str, font: &Font) -> Size {
    let (width, height) = measurer.measure(label, font).size();
    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;
    use swatch_text::TextMetrics;

    use super::*;

    /// Every label is 10 wide per character and 12 tall; lines are 12 tall.
    struct Fixed;

    impl TextMeasurer for Fixed {
        fn measure(&self, text: &str, _font: &Font) -> TextMetrics {
            TextMetrics {
                advance_width: 10.0 * text.chars().count() as f64,
                ascent: 9.0,
                descent: 3.0,
                leading: 0.0,
            }
        }
    }

    fn abc() -> Vec<LegendEntry> {
        vec![
            LegendEntry::labeled("A", css::RED),
            LegendEntry::labeled("B", css::GREEN),
            LegendEntry::labeled("C", css::BLUE),
        ]
    }

    fn unwrapped() -> LegendStyle {
        LegendStyle::default().with_max_size_percent(1.0)
    }

    fn horizontal(entries: &[LegendEntry], style: &LegendStyle, width: f64) -> LegendLayout {
        LegendLayout::compute(entries, style, Orientation::Horizontal, &Fixed, width)
    }

    #[test]
    fn three_entries_fit_on_one_line() {
        let layout = horizontal(&abc(), &unwrapped(), 1000.0);
        assert_eq!(layout.line_sizes.as_slice(), &[Size::new(81.0, 12.0)]);
        assert_eq!(layout.break_before, vec![false, false, false]);
        assert_eq!(layout.needed, Size::new(81.0, 12.0));
    }

    #[test]
    fn narrow_width_wraps_between_entries() {
        let layout = horizontal(&abc(), &unwrapped(), 40.0);
        assert_eq!(layout.line_sizes.as_slice(), &[Size::new(23.0, 12.0); 3]);
        assert_eq!(layout.break_before, vec![false, true, true]);
        assert_eq!(layout.needed, Size::new(23.0, 36.0));
    }

    #[test]
    fn max_size_percent_is_applied_once() {
        // 81 fits in 100 * 0.95 but not in 100 * 0.95 * 0.95.
        let style = LegendStyle::default();
        let layout = horizontal(&abc(), &style, 100.0);
        assert_eq!(layout.line_count(), 1);

        let layout = horizontal(&abc(), &style, 85.0);
        assert_eq!(layout.line_count(), 2, "85 * 0.95 = 80.75 < 81");
    }

    #[test]
    fn wrap_disabled_keeps_one_line() {
        let style = unwrapped().with_word_wrap(false);
        let layout = horizontal(&abc(), &style, 10.0);
        assert_eq!(layout.line_sizes.as_slice(), &[Size::new(81.0, 12.0)]);
        assert!(layout.break_before.iter().all(|b| !b));
    }

    #[test]
    fn oversized_unit_gets_exactly_one_line() {
        let entries = vec![
            LegendEntry::labeled("A", css::RED),
            LegendEntry::labeled("a very long label", css::GREEN),
            LegendEntry::labeled("C", css::BLUE),
        ];
        let layout = horizontal(&entries, &unwrapped(), 40.0);
        assert_eq!(layout.break_before, vec![false, true, true]);
        assert_eq!(
            layout.line_sizes.as_slice(),
            &[
                Size::new(23.0, 12.0),
                Size::new(183.0, 12.0),
                Size::new(23.0, 12.0)
            ]
        );
        assert_eq!(layout.needed.width, 183.0);
    }

    #[test]
    fn group_breaks_at_its_first_form() {
        // "A" (23), then group [G, G] + "B": 8 + 3 + 8 + 3 + 8 + 5 + 10 = 45.
        let entries = vec![
            LegendEntry::labeled("A", css::RED),
            LegendEntry::group(css::GREEN),
            LegendEntry::group(css::BLUE),
            LegendEntry::labeled("B", css::BLACK),
        ];
        let layout = horizontal(&entries, &unwrapped(), 60.0);
        assert_eq!(layout.break_before, vec![false, true, false, false]);
        assert_eq!(
            layout.line_sizes.as_slice(),
            &[Size::new(23.0, 12.0), Size::new(45.0, 12.0)]
        );

        let wide = horizontal(&entries, &unwrapped(), 1000.0);
        assert_eq!(wide.line_sizes.as_slice(), &[Size::new(74.0, 12.0)]);
    }

    #[test]
    fn trailing_group_closes_the_last_line() {
        let entries = vec![
            LegendEntry::labeled("A", css::RED),
            LegendEntry::group(css::GREEN),
        ];
        let layout = horizontal(&entries, &unwrapped(), 1000.0);
        assert_eq!(layout.line_sizes.as_slice(), &[Size::new(23.0 + 6.0 + 8.0, 12.0)]);
        assert_eq!(layout.label_sizes[1], Size::ZERO);
    }

    #[test]
    fn formless_label_reserves_text_only() {
        let entries = vec![LegendEntry::text("AB")];
        let layout = horizontal(&entries, &unwrapped(), 1000.0);
        assert_eq!(layout.needed, Size::new(20.0, 12.0));
    }

    #[test]
    fn y_entry_space_separates_lines() {
        let style = unwrapped().with_y_entry_space(4.0);
        let layout = horizontal(&abc(), &style, 40.0);
        assert_eq!(layout.needed.height, 3.0 * 12.0 + 2.0 * 4.0);
    }

    #[test]
    fn empty_legend_needs_nothing() {
        let layout = horizontal(&[], &unwrapped(), 100.0);
        assert_eq!(layout.line_count(), 0);
        assert_eq!(layout.needed, Size::ZERO);

        let layout = LegendLayout::compute(&[], &unwrapped(), Orientation::Vertical, &Fixed, 0.0);
        assert_eq!(layout.needed, Size::ZERO);
    }

    #[test]
    fn vertical_group_and_label_share_one_row() {
        let entries = vec![
            LegendEntry::group(css::RED),
            LegendEntry::text("Label"),
        ];
        let style = unwrapped().with_y_entry_space(2.0);
        let layout = LegendLayout::compute(&entries, &style, Orientation::Vertical, &Fixed, 0.0);
        assert_eq!(layout.needed.height, 12.0 + 2.0);
        assert_eq!(layout.needed.width, 50.0);
        assert!(layout.line_sizes.is_empty());
    }

    #[test]
    fn vertical_rows_use_widest_entry() {
        let entries = vec![
            LegendEntry::labeled("A", css::RED),
            LegendEntry::labeled("Long", css::GREEN),
            LegendEntry::text("Mid"),
        ];
        let layout =
            LegendLayout::compute(&entries, &unwrapped(), Orientation::Vertical, &Fixed, 0.0);
        assert_eq!(layout.needed.width, 8.0 + 5.0 + 40.0);
        assert_eq!(layout.needed.height, 2.0 * 12.0, "last row is not committed");
    }

    #[test]
    fn vertical_stacked_forms_are_spaced() {
        let entries = vec![
            LegendEntry::group(css::RED),
            LegendEntry::group(css::GREEN),
            LegendEntry::group(css::BLUE),
        ];
        let layout =
            LegendLayout::compute(&entries, &unwrapped(), Orientation::Vertical, &Fixed, 0.0);
        assert_eq!(layout.needed.width, 3.0 * 8.0 + 2.0 * 3.0);
        assert_eq!(layout.needed.height, 0.0);
    }

    #[test]
    fn vertical_colorless_groups_still_take_form_width() {
        let entries = vec![LegendEntry::new(None, None), LegendEntry::new(None, None)];
        let layout =
            LegendLayout::compute(&entries, &unwrapped(), Orientation::Vertical, &Fixed, 0.0);
        assert_eq!(layout.needed, Size::new(8.0 + 3.0 + 8.0, 0.0));
    }

    #[test]
    fn vertical_height_counts_each_group_row() {
        // [G, G, "L"] then [G, "MM"]: each label commits a row unless last,
        // and each label closing a group commits one more.
        let entries = vec![
            LegendEntry::group(css::RED),
            LegendEntry::group(css::GREEN),
            LegendEntry::labeled("L", css::BLUE),
            LegendEntry::group(css::GOLD),
            LegendEntry::labeled("MM", css::BLACK),
        ];
        let style = unwrapped().with_y_entry_space(1.0);
        let layout = LegendLayout::compute(&entries, &style, Orientation::Vertical, &Fixed, 0.0);
        // Widest run is the first group: 8 + 3 + 8 + 3 + 8.
        assert_eq!(layout.needed, Size::new(30.0, 3.0 * 13.0));
    }

    #[test]
    fn oversized_group_unit_breaks_only_at_its_start() {
        // Group [G, G] + long label: 8 + 3 + 8 + 3 + 8 + 5 + 170 = 205.
        let entries = vec![
            LegendEntry::labeled("A", css::RED),
            LegendEntry::group(css::GREEN),
            LegendEntry::group(css::BLUE),
            LegendEntry::labeled("a very long label", css::BLACK),
            LegendEntry::labeled("C", css::GOLD),
        ];
        let layout = horizontal(&entries, &unwrapped(), 40.0);
        assert_eq!(layout.break_before, vec![false, true, false, false, true]);
        assert_eq!(
            layout.line_sizes.as_slice(),
            &[
                Size::new(23.0, 12.0),
                Size::new(205.0, 12.0),
                Size::new(23.0, 12.0)
            ]
        );
    }

    #[test]
    fn colorless_group_member_keeps_stack_space() {
        // No form for the first slot, but stacking gaps still apply:
        // 3 + 8 + 3 + (8 + 5 + 10) = 37.
        let entries = vec![
            LegendEntry::new(None, None),
            LegendEntry::group(css::GREEN),
            LegendEntry::labeled("B", css::BLACK),
        ];
        let layout = horizontal(&entries, &unwrapped(), 1000.0);
        assert_eq!(layout.line_sizes.as_slice(), &[Size::new(37.0, 12.0)]);
        assert_eq!(layout.break_before, vec![false, false, false]);
    }

    #[test]
    fn max_entry_size_skips_groups() {
        let style = unwrapped();
        let groups = vec![LegendEntry::group(css::RED), LegendEntry::group(css::BLUE)];
        assert_eq!(max_entry_size(&groups, &style, &Fixed), Size::new(13.0, 0.0));

        let mixed = vec![LegendEntry::group(css::RED), LegendEntry::text("ABC")];
        assert_eq!(max_entry_size(&mixed, &style, &Fixed), Size::new(43.0, 12.0));

        let layout = horizontal(&mixed, &style, 1000.0);
        assert_eq!(layout.text_max, Size::new(43.0, 12.0));
        assert_eq!(layout.text_width_max(), 43.0);
        assert_eq!(layout.text_height_max(), 12.0);
    }

    #[test]
    fn reuse_shrinks_per_entry_arrays() {
        let style = unwrapped();
        let mut layout = horizontal(&abc(), &style, 40.0);
        assert_eq!(layout.break_before.len(), 3);

        let one = vec![LegendEntry::labeled("Z", css::RED)];
        layout.recompute(&one, &style, Orientation::Horizontal, &Fixed, 40.0);

        assert_eq!(layout, horizontal(&one, &style, 40.0));
        assert_eq!(layout.label_sizes.len(), 1);
        assert_eq!(layout.break_before, vec![false]);
    }

    #[test]
    fn switching_to_vertical_clears_line_data() {
        let style = unwrapped();
        let mut layout = horizontal(&abc(), &style, 40.0);
        layout.recompute(&abc(), &style, Orientation::Vertical, &Fixed, 40.0);
        assert!(layout.line_sizes.is_empty());
        assert!(layout.break_before.iter().all(|b| !b));
        assert_eq!(layout.label_sizes.len(), 3);
    }

    #[test]
    fn recomputing_is_idempotent() {
        let entries = vec![
            LegendEntry::group(css::RED),
            LegendEntry::labeled("A", css::GREEN),
            LegendEntry::text("BB"),
            LegendEntry::group(css::BLUE),
        ];
        let style = unwrapped();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let mut layout = LegendLayout::compute(&entries, &style, orientation, &Fixed, 30.0);
            let first = layout.clone();
            layout.recompute(&entries, &style, orientation, &Fixed, 30.0);
            assert_eq!(layout, first);
        }
    }
}
