// Copyright 2025 the Swatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend configuration errors.

/// Errors returned when configuring legend entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegendError {
    /// Paired color and label lists differ in length.
    #[error("legend colors and labels must have the same length ({colors} colors, {labels} labels)")]
    InvalidArgument {
        /// Number of colors supplied.
        colors: usize,
        /// Number of labels supplied.
        labels: usize,
    },
}
