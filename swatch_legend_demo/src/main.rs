// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend layout demos for `swatch_legend`.
//!
//! Writes `swatch_legend_demo.html` with one SVG per scenario. Set
//! `RUST_LOG=swatch_legend=trace` to watch lines being closed.

mod svg;

use peniko::color::palette::css;
use swatch_legend::{Legend, LegendEntry, LegendPosition, LegendStyle};
use swatch_text::{CachingTextMeasurer, TextMeasurer};

struct Section {
    title: String,
    notes: String,
    svg: String,
}

fn main() {
    env_logger::init();

    let measurer = CachingTextMeasurer::new(demo_measurer());
    let sections = vec![
        wrap_demo(&measurer, 600.0),
        wrap_demo(&measurer, 180.0),
        grouped_demo(&measurer),
        column_demo(&measurer),
        custom_demo(&measurer),
    ];
    log::info!("measured {} distinct labels", measurer.len());

    let html = render_report("Swatch legend layout demo", &sections);
    if let Err(err) = std::fs::write("swatch_legend_demo.html", html) {
        eprintln!("failed to write swatch_legend_demo.html: {err}");
        std::process::exit(1);
    }
    println!("wrote swatch_legend_demo.html");
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(swatch_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(all(feature = "web", not(feature = "parley")))]
    {
        web_measurer()
    }

    #[cfg(not(any(feature = "parley", feature = "web")))]
    {
        Box::new(swatch_text::HeuristicTextMeasurer)
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn web_measurer() -> Box<dyn TextMeasurer> {
    match swatch_text_web::WebTextMeasurer::new() {
        Ok(measurer) => Box::new(measurer),
        Err(err) => {
            log::warn!("no canvas for text measurement ({err:?}); using heuristic");
            Box::new(swatch_text::HeuristicTextMeasurer)
        }
    }
}

#[cfg(all(feature = "web", not(target_arch = "wasm32")))]
fn web_measurer() -> Box<dyn TextMeasurer> {
    Box::new(swatch_text_web::WebTextMeasurer::new())
}

fn fruit_entries() -> Vec<LegendEntry> {
    vec![
        LegendEntry::labeled("Apples", css::CRIMSON),
        LegendEntry::labeled("Bananas", css::GOLD),
        LegendEntry::labeled("Cherries", css::DARK_RED),
        LegendEntry::labeled("Dates", css::SADDLE_BROWN),
        LegendEntry::labeled("Elderberries", css::INDIGO),
        LegendEntry::labeled("Figs", css::PURPLE),
    ]
}

fn section(
    title: impl Into<String>,
    legend: &mut Legend,
    entries: &[LegendEntry],
    measurer: &dyn TextMeasurer,
    content_width: f64,
) -> Section {
    let layout = legend
        .calculate_dimensions(entries, measurer, content_width)
        .clone();
    let line_height = measurer.line_height(&legend.style.font);
    let notes = format!(
        "{:?}, content width {content_width}: needed {:.1} x {:.1}, {} line(s), breaks at {:?}",
        legend.legacy_position(),
        layout.needed_width(),
        layout.needed_height(),
        layout.line_count(),
        layout
            .break_before
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i))
            .collect::<Vec<_>>(),
    );
    let svg = svg::SvgLegend::render(
        entries,
        &layout,
        &legend.style,
        legend.position.orientation,
        line_height,
    );
    Section {
        title: title.into(),
        notes,
        svg,
    }
}

fn wrap_demo(measurer: &dyn TextMeasurer, content_width: f64) -> Section {
    let mut legend = Legend::new().with_legacy_position(LegendPosition::BelowChartLeft);
    legend.entries_mut().set_entries(fruit_entries());
    let entries = legend.entries().merged();
    section(
        format!("Word wrap at {content_width}"),
        &mut legend,
        &entries,
        measurer,
        content_width,
    )
}

fn grouped_demo(measurer: &dyn TextMeasurer) -> Section {
    // Stacked forms share one label, e.g. a stacked bar's segments.
    let mut legend = Legend::new()
        .with_legacy_position(LegendPosition::AboveChartCenter)
        .with_style(LegendStyle::default().with_form_size(10.0));
    legend.entries_mut().set_entries(vec![
        LegendEntry::group(css::LIGHT_BLUE),
        LegendEntry::group(css::STEEL_BLUE),
        LegendEntry::labeled("Visits (by device)", css::NAVY),
        LegendEntry::labeled("Conversions", css::ORANGE),
        LegendEntry::text("(no form)"),
    ]);
    let entries = legend.entries().merged();
    section("Grouped forms", &mut legend, &entries, measurer, 220.0)
}

fn column_demo(measurer: &dyn TextMeasurer) -> Section {
    let mut legend = Legend::new()
        .with_legacy_position(LegendPosition::RightOfChartCenter)
        .with_style(LegendStyle::default().with_y_entry_space(4.0));
    legend.entries_mut().set_entries(fruit_entries());
    let entries = legend.entries().merged();
    section("Vertical column", &mut legend, &entries, measurer, 600.0)
}

fn custom_demo(measurer: &dyn TextMeasurer) -> Section {
    let mut legend = Legend::new();
    if let Err(err) = legend.set_custom(
        vec![Some(css::SEA_GREEN), Some(css::TOMATO)],
        vec![Some("Actual".into())],
    ) {
        log::warn!("custom legend rejected: {err}");
    }
    let colors = vec![Some(css::SEA_GREEN), Some(css::TOMATO)];
    let labels = vec![Some("Actual".into()), Some("Forecast".into())];
    if let Err(err) = legend.set_custom(colors, labels) {
        log::warn!("custom legend rejected: {err}");
    }
    if let Err(err) = legend.set_extra(vec![None], vec![Some("source: demo".into())]) {
        log::warn!("extra entries rejected: {err}");
    }
    let entries = legend.entries().merged();
    section("Custom + extra entries", &mut legend, &entries, measurer, 400.0)
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{}</title>", svg::escape_xml(title)));
    out.push_str("<style>body{font-family:sans-serif} svg{border:1px solid #eee}</style>");
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", svg::escape_xml(title)));
    for s in sections {
        out.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n{}\n",
            svg::escape_xml(&s.title),
            svg::escape_xml(&s.notes),
            s.svg
        ));
    }
    out.push_str("</body></html>\n");
    out
}
