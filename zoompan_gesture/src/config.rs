// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use zoompan_transform::{ClampMode, ZoomBand};

/// Tunables for [`crate::PanZoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PanZoomConfig {
    /// Band the tap zoom-in scale is clamped into.
    pub zoom_band: ZoomBand,
    /// Multiplier applied to the container/content fit ratio on tap zoom-in.
    pub zoom_fill_factor: f64,
    /// Taps needed to toggle zoom.
    pub tap_count: u32,
    /// Longest gap between consecutive taps of one run.
    pub tap_interval_ms: u64,
    /// Largest distance between consecutive taps of one run, in pixels.
    pub tap_slop: f64,
    /// Screen pixels of content left reachable after a snap-back.
    pub boundary_margin: f64,
    /// Fewest pointers that may start a pan.
    pub min_pointers: u32,
    /// Most pointers that may start a pan.
    pub max_pointers: u32,
    /// Length of settle animations.
    pub settle_duration_ms: u64,
    /// Upper bound on the scale a pinch may commit, if any.
    pub max_pinch_scale: Option<f64>,
    /// Pan-enabled flag at construction and after [`crate::PanZoom::reset`].
    pub pan_enabled_initially: bool,
    /// Boundary clamping applied when a gesture commits.
    pub clamp_mode: ClampMode,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            zoom_band: ZoomBand::default(),
            zoom_fill_factor: 0.8,
            tap_count: 2,
            tap_interval_ms: 300,
            tap_slop: 20.0,
            boundary_margin: 50.0,
            min_pointers: 1,
            max_pointers: 2,
            settle_duration_ms: 250,
            max_pinch_scale: None,
            pan_enabled_initially: false,
            clamp_mode: ClampMode::KeepSomeVisible,
        }
    }
}

impl PanZoomConfig {
    /// Checks every field, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoomBand { min, max } = self.zoom_band;
        if !(min.is_finite() && max.is_finite() && min >= 1.0) {
            return Err(ConfigError::InvalidZoomBand { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedZoomBand { min, max });
        }
        if !(self.zoom_fill_factor.is_finite() && self.zoom_fill_factor > 0.0) {
            return Err(ConfigError::InvalidFillFactor(self.zoom_fill_factor));
        }
        if self.tap_count == 0 {
            return Err(ConfigError::ZeroTapCount);
        }
        if !(self.tap_slop.is_finite() && self.tap_slop >= 0.0) {
            return Err(ConfigError::InvalidTapSlop(self.tap_slop));
        }
        if !(self.boundary_margin.is_finite() && self.boundary_margin >= 0.0) {
            return Err(ConfigError::InvalidMargin(self.boundary_margin));
        }
        if self.min_pointers == 0 || self.min_pointers > self.max_pointers {
            return Err(ConfigError::InvalidPointerRange {
                min: self.min_pointers,
                max: self.max_pointers,
            });
        }
        if let Some(cap) = self.max_pinch_scale
            && !(cap.is_finite() && cap >= 1.0)
        {
            return Err(ConfigError::InvalidPinchCap(cap));
        }
        Ok(())
    }
}

/// A [`PanZoomConfig`] field that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A zoom band bound is non-finite, or the band reaches below 1x.
    #[error("zoom band [{min}, {max}] must be finite and at least 1")]
    InvalidZoomBand {
        /// Lower bound given.
        min: f64,
        /// Upper bound given.
        max: f64,
    },
    /// The zoom band minimum exceeds its maximum.
    #[error("zoom band minimum {min} exceeds maximum {max}")]
    InvertedZoomBand {
        /// Lower bound given.
        min: f64,
        /// Upper bound given.
        max: f64,
    },
    /// The fill factor is non-finite or not positive.
    #[error("zoom fill factor {0} must be finite and positive")]
    InvalidFillFactor(f64),
    /// A tap count of zero can never complete.
    #[error("tap count must be at least 1")]
    ZeroTapCount,
    /// The tap slop is negative or non-finite.
    #[error("tap slop {0} must be finite and non-negative")]
    InvalidTapSlop(f64),
    /// The boundary margin is negative or non-finite.
    #[error("boundary margin {0} must be finite and non-negative")]
    InvalidMargin(f64),
    /// The pan pointer range is empty or starts at zero.
    #[error("pan pointer range {min}..={max} is invalid")]
    InvalidPointerRange {
        /// Minimum pointers given.
        min: u32,
        /// Maximum pointers given.
        max: u32,
    },
    /// The pinch cap is below 1 or non-finite.
    #[error("max pinch scale {0} must be finite and at least 1")]
    InvalidPinchCap(f64),
}
