// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a computed legend layout.
//!
//! Only here to eyeball layouts; it places forms and labels the simple way a
//! renderer would, using the break points and sizes from [`LegendLayout`].

use kurbo::Rect;
use peniko::Color;
use swatch_legend::{LegendEntry, LegendLayout, LegendStyle, Orientation};

const PAD: f64 = 10.0;

#[derive(Debug, Default)]
pub(crate) struct SvgLegend {
    body: String,
}

impl SvgLegend {
    pub(crate) fn render(
        entries: &[LegendEntry],
        layout: &LegendLayout,
        style: &LegendStyle,
        orientation: Orientation,
        line_height: f64,
    ) -> String {
        let mut svg = Self::default();
        svg.outline(Rect::new(0.0, 0.0, layout.needed.width, layout.needed.height));
        match orientation {
            Orientation::Horizontal => svg.lines(entries, layout, style, line_height),
            Orientation::Vertical => svg.rows(entries, layout, style, line_height),
        }
        svg.finish(layout)
    }

    fn lines(
        &mut self,
        entries: &[LegendEntry],
        layout: &LegendLayout,
        style: &LegendStyle,
        line_height: f64,
    ) {
        let mut x = 0.0;
        let mut line = 0_usize;
        for (i, entry) in entries.iter().enumerate() {
            if layout.break_before[i] {
                line += 1;
                x = 0.0;
            } else if i > 0 {
                x += if entries[i - 1].is_group() {
                    style.stack_space
                } else {
                    style.x_entry_space
                };
            }
            let y = line as f64 * (line_height + style.y_entry_space);
            x = self.entry(entry, layout.label_sizes[i].width, style, x, y, line_height);
        }
    }

    fn rows(
        &mut self,
        entries: &[LegendEntry],
        layout: &LegendLayout,
        style: &LegendStyle,
        line_height: f64,
    ) {
        let mut x = 0.0;
        let mut y = 0.0;
        for (i, entry) in entries.iter().enumerate() {
            x = self.entry(entry, layout.label_sizes[i].width, style, x, y, line_height);
            if entry.is_group() {
                x += style.stack_space;
            } else {
                x = 0.0;
                y += line_height + style.y_entry_space;
            }
        }
    }

    /// Draws one entry starting at `x` and returns the x where it ends.
    fn entry(
        &mut self,
        entry: &LegendEntry,
        label_width: f64,
        style: &LegendStyle,
        mut x: f64,
        y: f64,
        line_height: f64,
    ) -> f64 {
        if let Some(color) = entry.color {
            let top = y + 0.5 * (line_height - style.form_size);
            self.rect(
                Rect::new(x, top, x + style.form_size, top + style.form_size),
                color,
            );
            x += style.form_size;
            if entry.label.is_some() {
                x += style.form_to_text_space;
            }
        }
        if let Some(label) = &entry.label {
            self.text(x, y + 0.5 * line_height, style.font.size, label);
            x += label_width;
        }
        x
    }

    fn outline(&mut self, r: Rect) {
        self.body.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#999" stroke-dasharray="3 2"/>"##,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        ));
        self.body.push('\n');
    }

    fn rect(&mut self, r: Rect, color: Color) {
        let rgba = color.to_rgba8();
        self.body.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#{:02x}{:02x}{:02x}"/>"##,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            rgba.r,
            rgba.g,
            rgba.b
        ));
        self.body.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, font_size: f64, text: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{font_size}" dominant-baseline="middle">{}</text>"#,
            escape_xml(text)
        ));
        self.body.push('\n');
    }

    fn finish(self, layout: &LegendLayout) -> String {
        let w = layout.needed.width + 2.0 * PAD;
        let h = layout.needed.height.max(1.0) + 2.0 * PAD;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {w} {h}\" width=\"{w}\" height=\"{h}\">\n{}</svg>\n",
            -PAD, -PAD, self.body
        )
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
