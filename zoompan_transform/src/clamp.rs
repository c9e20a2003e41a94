// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom and boundary policy.
//!
//! All functions here are pure. Translations are in content space, so the
//! content occupies `scale * translate ..= scale * (translate + extent)` on
//! screen along each axis, measured from the container origin.

use kurbo::{Size, Vec2};

use crate::geometry::{Boundary, is_usable_size};
use crate::modes::ClampMode;

/// Inclusive scale range used for tap-to-zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomBand {
    /// Smallest zoom-in scale.
    pub min: f64,
    /// Largest zoom-in scale.
    pub max: f64,
}

impl ZoomBand {
    /// Creates a band, swapping the bounds if they are given in reverse.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `scale` into the band.
    ///
    /// A NaN bound is ignored rather than propagated, and an inverted band
    /// resolves to `max`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

impl Default for ZoomBand {
    fn default() -> Self {
        Self { min: 1.4, max: 1.5 }
    }
}

/// Scale to zoom into on a tap toggle.
///
/// The container/content fit ratio (the smaller of the two axis ratios) is
/// multiplied by `fill_factor` and clamped into `band`. Returns `None` until
/// both sizes are usable.
///
/// ```rust
/// use kurbo::Size;
/// use zoompan_transform::{ZoomBand, tap_zoom_scale};
///
/// let scale = tap_zoom_scale(
///     Size::new(400.0, 400.0),
///     Size::new(800.0, 800.0),
///     0.8,
///     ZoomBand::new(1.4, 1.5),
/// );
/// assert_eq!(scale, Some(1.4));
/// ```
#[must_use]
pub fn tap_zoom_scale(container: Size, content: Size, fill_factor: f64, band: ZoomBand) -> Option<f64> {
    if !is_usable_size(container) || !is_usable_size(content) {
        return None;
    }
    let fit = (container.width / content.width).min(container.height / content.height);
    let target = fit * fill_factor;
    if !target.is_finite() {
        return None;
    }
    Some(band.clamp(target))
}

/// One axis of the boundary, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpan {
    /// Leading container edge.
    pub lead: f64,
    /// Trailing container edge used to detect overflow.
    pub trail: f64,
    /// Part of `trail` that is platform chrome rather than container.
    pub trail_inset: f64,
}

impl AxisSpan {
    fn extent(&self) -> f64 {
        self.trail - self.trail_inset - self.lead
    }
}

/// Clamps one axis of a content-space translation.
///
/// Content that fits the container on this axis is never moved. Otherwise the
/// axis is only corrected when the content has left the container entirely:
/// it is pulled back so that `margin` screen pixels of it remain inside.
#[must_use]
pub fn clamp_axis(translate: f64, scale: f64, extent: f64, span: AxisSpan, margin: f64) -> f64 {
    if !(scale.is_finite() && scale > 0.0 && extent > 0.0 && translate.is_finite()) {
        return translate;
    }
    if scale * extent <= span.extent() {
        return translate;
    }
    let start = scale * translate;
    let end = scale * (translate + extent);
    if end < span.lead {
        (span.lead + margin) / scale - extent
    } else if start > span.trail {
        (span.trail - span.trail_inset - margin) / scale
    } else {
        translate
    }
}

/// Clamps a content-space translation against `boundary`, one axis at a time.
#[must_use]
pub fn clamp_translation(
    translate: Vec2,
    scale: f64,
    content: Size,
    boundary: &Boundary,
    margin: f64,
    mode: ClampMode,
) -> Vec2 {
    if mode == ClampMode::None || boundary.width() <= 0.0 || boundary.height() <= 0.0 {
        return translate;
    }
    let x_span = AxisSpan {
        lead: boundary.rect.x0,
        trail: boundary.rect.x1,
        trail_inset: 0.0,
    };
    let y_span = AxisSpan {
        lead: boundary.rect.y0,
        trail: boundary.rect.y1,
        trail_inset: boundary.vertical_inset,
    };
    Vec2::new(
        clamp_axis(translate.x, scale, content.width, x_span, margin),
        clamp_axis(translate.y, scale, content.height, y_span, margin),
    )
}
