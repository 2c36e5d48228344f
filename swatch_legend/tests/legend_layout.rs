// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end legend behavior through the public API.

use kurbo::Size;
use peniko::color::palette::css;
use pretty_assertions::assert_eq;
use swatch_legend::{
    Direction, Legend, LegendEntry, LegendError, LegendPosition, LegendStyle, Orientation,
    PositionConfig,
};
use swatch_text::{CachingTextMeasurer, Font, TextMeasurer, TextMetrics};

/// 10 units per character, 12 units per line.
struct Monospace;

impl TextMeasurer for Monospace {
    fn measure(&self, text: &str, _font: &Font) -> TextMetrics {
        TextMetrics {
            advance_width: 10.0 * text.chars().count() as f64,
            ascent: 10.0,
            descent: 2.0,
            leading: 0.0,
        }
    }
}

fn horizontal_legend() -> Legend {
    Legend::new()
        .with_legacy_position(LegendPosition::BelowChartCenter)
        .with_style(LegendStyle::default().with_max_size_percent(1.0))
}

fn abc() -> Vec<LegendEntry> {
    vec![
        LegendEntry::labeled("A", css::RED),
        LegendEntry::labeled("B", css::GREEN),
        LegendEntry::labeled("C", css::BLUE),
    ]
}

#[test]
fn wide_chart_fits_everything_on_one_line() {
    let mut legend = horizontal_legend();
    let layout = legend.calculate_dimensions(&abc(), &Monospace, 1000.0);

    assert_eq!(layout.line_sizes.to_vec(), vec![Size::new(81.0, 12.0)]);
    assert_eq!(layout.break_before, vec![false, false, false]);
    assert_eq!(layout.needed_width(), 81.0);
    assert_eq!(layout.needed_height(), 12.0);
}

#[test]
fn narrow_chart_wraps_each_entry() {
    let mut legend = horizontal_legend();
    let layout = legend.calculate_dimensions(&abc(), &Monospace, 40.0);

    assert_eq!(layout.line_sizes.to_vec(), vec![Size::new(23.0, 12.0); 3]);
    assert_eq!(layout.break_before, vec![false, true, true]);
}

#[test]
fn last_line_reflects_last_entry() {
    let entries = vec![
        LegendEntry::labeled("Alpha", css::RED),
        LegendEntry::labeled("Beta", css::GREEN),
        LegendEntry::labeled("Gamma", css::BLUE),
        LegendEntry::labeled("D", css::BLACK),
    ];
    let mut legend = horizontal_legend();
    let layout = legend.calculate_dimensions(&entries, &Monospace, 130.0);

    // 63 + 6 + 53 = 122 fits; 63 doesn't; the final "D" (23) joins it.
    assert_eq!(
        layout.line_sizes.to_vec(),
        vec![Size::new(122.0, 12.0), Size::new(63.0 + 6.0 + 23.0, 12.0)]
    );
    assert_eq!(layout.break_before, vec![false, false, true, false]);
}

#[test]
fn extra_entries_are_laid_out_after_primary() {
    let mut legend = horizontal_legend();
    legend
        .set_custom(
            vec![Some(css::RED), Some(css::GREEN)],
            vec![Some("A".into()), Some("B".into())],
        )
        .unwrap();
    legend
        .set_extra(vec![None], vec![Some("note".into())])
        .unwrap();

    let entries = legend.entries().merged();
    let layout = legend.calculate_dimensions(&entries, &Monospace, 1000.0);

    assert_eq!(layout.label_sizes.len(), 3);
    assert_eq!(layout.label_sizes[2], Size::new(40.0, 12.0));
    assert_eq!(layout.needed_width(), 23.0 + 6.0 + 23.0 + 6.0 + 40.0);
}

#[test]
fn rejected_custom_entries_keep_previous_state() {
    let mut legend = Legend::new();
    legend
        .set_custom(vec![Some(css::RED)], vec![Some("X".into())])
        .unwrap();

    let err = legend
        .set_custom(
            vec![Some(css::RED), Some(css::BLUE)],
            vec![Some("X".into())],
        )
        .unwrap_err();

    assert_eq!(
        err,
        LegendError::InvalidArgument {
            colors: 2,
            labels: 1
        }
    );
    assert!(legend.entries().is_custom());
    assert_eq!(
        legend.entries().primary(),
        &[LegendEntry::labeled("X", css::RED)]
    );
}

#[test]
fn rejected_extra_entries_keep_previous_extra() {
    let mut legend = Legend::new();
    legend
        .set_extra(vec![Some(css::RED)], vec![None])
        .unwrap();
    assert!(legend.set_extra(vec![], vec![None]).is_err());
    assert_eq!(legend.entries().extra(), &[LegendEntry::group(css::RED)]);
    assert!(!legend.entries().is_custom());
}

#[test]
fn reset_custom_returns_to_auto() {
    let mut legend = Legend::new();
    legend
        .set_custom(vec![None], vec![Some("kept".into())])
        .unwrap();
    legend.reset_custom();
    assert!(!legend.entries().is_custom());
    assert_eq!(legend.entries().label(0), Some("kept"));
}

#[test]
fn layout_is_idempotent_with_cached_measurer() {
    let measurer = CachingTextMeasurer::new(Monospace);
    let entries = vec![
        LegendEntry::group(css::RED),
        LegendEntry::labeled("Grouped", css::GREEN),
        LegendEntry::text("plain"),
        LegendEntry::labeled("tail", css::BLUE),
    ];

    for position in LegendPosition::ALL {
        let mut legend = Legend::new().with_legacy_position(position);
        let first = legend
            .calculate_dimensions(&entries, &measurer, 90.0)
            .clone();
        let second = legend.calculate_dimensions(&entries, &measurer, 90.0);
        assert_eq!(&first, second);
    }
    assert_eq!(measurer.len(), 3, "each distinct label measured once");
}

#[test]
fn vertical_group_fuses_with_label() {
    let mut legend = Legend::new()
        .with_legacy_position(LegendPosition::RightOfChartCenter)
        .with_style(LegendStyle::default().with_y_entry_space(1.0));
    let entries = vec![LegendEntry::group(css::RED), LegendEntry::text("Label")];

    let layout = legend.calculate_dimensions(&entries, &Monospace, 0.0);
    assert_eq!(layout.needed_height(), 13.0);
}

#[test]
fn legacy_positions_round_trip_regardless_of_direction() {
    for position in LegendPosition::ALL {
        let config = PositionConfig::default()
            .with_direction(Direction::RightToLeft)
            .with_position(position);
        assert_eq!(LegendPosition::from_config(&config), position);
        assert_eq!(config.direction, Direction::RightToLeft);
    }

    let config: PositionConfig = LegendPosition::AboveChartRight.into();
    assert_eq!(config.orientation, Orientation::Horizontal);
}
