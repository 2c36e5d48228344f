// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser text measurement.
//!
//! On `wasm32` targets [`WebTextMeasurer`] asks an HTML canvas 2D context to
//! `measureText` each label. Everywhere else it falls back to
//! [`HeuristicTextMeasurer`], so code using it still builds and tests natively.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::{format, string::String};
#[cfg(target_arch = "wasm32")]
use swatch_text::LINE_HEIGHT_PROBE;
use swatch_text::{Font, HeuristicTextMeasurer, TextMeasurer, TextMetrics};

/// Canvas-backed measurer (heuristic off the web).
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

/// The CSS `font` shorthand for `font`, e.g. `"italic 700 10px serif"`.
#[must_use]
pub fn css_font(font: &Font) -> alloc::string::String {
    alloc::format!(
        "{} {} {}px {}",
        font.style.as_css_keyword(),
        font.weight.0,
        font.size,
        font.family.as_css_family()
    )
}

impl WebTextMeasurer {
    /// Creates a measurer on a fresh offscreen canvas.
    ///
    /// Requires `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let missing = |what: &str| {
            wasm_bindgen::JsValue::from_str(&format!("swatch_text_web: missing {what}"))
        };
        let document = web_sys::window()
            .ok_or_else(|| missing("window"))?
            .document()
            .ok_or_else(|| missing("document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| missing("2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Measures with a canvas context owned by the embedder.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates the heuristic fallback.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        #[cfg(target_arch = "wasm32")]
        {
            let css: String = css_font(font);
            self.ctx.set_font(&css);
            let Ok(metrics) = self.ctx.measure_text(text) else {
                return HeuristicTextMeasurer.measure(text, font);
            };

            // Older engines report zero bounding boxes; treat those as unknown.
            let fallback = HeuristicTextMeasurer.measure(text, font);
            let ascent = metrics.actual_bounding_box_ascent();
            let descent = metrics.actual_bounding_box_descent();
            TextMetrics {
                advance_width: metrics.width(),
                ascent: if ascent > 0.0 { ascent } else { fallback.ascent },
                descent: if descent > 0.0 { descent } else { fallback.descent },
                leading: 0.0,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, font)
    }

    /// Row height from the font's bounding box rather than the glyphs of
    /// [`swatch_text::LINE_HEIGHT_PROBE`], so rows don't shrink for labels without
    /// accents or descenders.
    fn line_height(&self, font: &Font) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            let css: String = css_font(font);
            self.ctx.set_font(&css);
            if let Ok(metrics) = self.ctx.measure_text(LINE_HEIGHT_PROBE) {
                let height =
                    metrics.font_bounding_box_ascent() + metrics.font_bounding_box_descent();
                if height > 0.0 {
                    return height;
                }
            }
        }

        HeuristicTextMeasurer.line_height(font)
    }
}
