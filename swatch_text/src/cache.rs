// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoizing wrapper around a [`TextMeasurer`].

use alloc::string::String;
use core::cell::RefCell;

use hashbrown::HashMap;

use crate::{Font, FontFamily, FontStyle, FontWeight, TextMeasurer, TextMetrics};

/// Hashable identity of a [`Font`]. The size is keyed by its bit pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FontKey {
    size_bits: u64,
    family: FontFamily,
    weight: FontWeight,
    style: FontStyle,
}

impl FontKey {
    fn new(font: &Font) -> Self {
        Self {
            size_bits: font.size.to_bits(),
            family: font.family.clone(),
            weight: font.weight,
            style: font.style,
        }
    }
}

#[derive(Debug, Default)]
struct FontCache {
    line_height: Option<f64>,
    texts: HashMap<String, TextMetrics>,
}

/// Caches the results of an inner measurer per `(text, font)`.
///
/// Shaping a label is far more expensive than a hash lookup, and legends
/// remeasure the same labels on every layout pass. The cache grows without
/// bound; call [`CachingTextMeasurer::clear`] when the label set changes
/// wholesale.
#[derive(Debug)]
pub struct CachingTextMeasurer<M> {
    inner: M,
    fonts: RefCell<HashMap<FontKey, FontCache>>,
}

impl<M: TextMeasurer> CachingTextMeasurer<M> {
    /// Wraps `inner`.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            fonts: RefCell::new(HashMap::new()),
        }
    }

    /// The wrapped measurer.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of cached `(text, font)` measurements.
    pub fn len(&self) -> usize {
        self.fonts.borrow().values().map(|f| f.texts.len()).sum()
    }

    /// Returns `true` if nothing has been measured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all cached measurements.
    pub fn clear(&self) {
        self.fonts.borrow_mut().clear();
    }

    /// Unwraps the inner measurer, discarding the cache.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachingTextMeasurer<M> {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        let key = FontKey::new(font);
        if let Some(hit) = self
            .fonts
            .borrow()
            .get(&key)
            .and_then(|f| f.texts.get(text))
        {
            return *hit;
        }

        let metrics = self.inner.measure(text, font);
        self.fonts
            .borrow_mut()
            .entry(key)
            .or_default()
            .texts
            .insert(String::from(text), metrics);
        metrics
    }

    fn line_height(&self, font: &Font) -> f64 {
        let key = FontKey::new(font);
        if let Some(hit) = self.fonts.borrow().get(&key).and_then(|f| f.line_height) {
            return hit;
        }

        let line_height = self.inner.line_height(font);
        self.fonts.borrow_mut().entry(key).or_default().line_height = Some(line_height);
        line_height
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::Cell;

    use super::*;
    use crate::HeuristicTextMeasurer;

    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
    }

    impl TextMeasurer for Counting {
        fn measure(&self, text: &str, font: &Font) -> TextMetrics {
            self.calls.set(self.calls.get() + 1);
            HeuristicTextMeasurer.measure(text, font)
        }
    }

    #[test]
    fn repeated_measurements_hit_the_cache() {
        let cache = CachingTextMeasurer::new(Counting::default());
        let font = Font::new(10.0);

        let first = cache.measure("Revenue", &font);
        let second = cache.measure("Revenue", &font);

        assert_eq!(first, second);
        assert_eq!(cache.inner().calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn fonts_are_keyed_separately() {
        let cache = CachingTextMeasurer::new(Counting::default());

        let small = cache.measure("Revenue", &Font::new(10.0));
        let large = cache.measure("Revenue", &Font::new(20.0));
        let bold = cache.measure("Revenue", &Font::new(10.0).with_weight(FontWeight::BOLD));

        assert!(large.advance_width > small.advance_width);
        assert_eq!(bold, small, "heuristic ignores weight");
        assert_eq!(cache.inner().calls.get(), 3);
    }

    #[test]
    fn line_height_is_cached_and_cleared() {
        let cache = CachingTextMeasurer::new(Counting::default());
        let font = Font::new(12.0);

        assert_eq!(cache.line_height(&font), 12.0);
        assert_eq!(cache.line_height(&font), 12.0);
        assert_eq!(cache.inner().calls.get(), 1, "probe measured once");

        cache.clear();
        assert!(cache.is_empty());
        let _ = cache.line_height(&font);
        assert_eq!(cache.inner().calls.get(), 2);
    }
}
