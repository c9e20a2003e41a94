// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container/content geometry and the boundary rectangle derived from it.

use kurbo::{Rect, Size};

/// Replaces negative or non-finite extents with zero.
///
/// Layout callbacks frequently report `NaN` before the first real measure
/// pass; nothing downstream should ever see those values.
#[must_use]
pub fn sanitize_size(size: Size) -> Size {
    Size::new(sanitize_extent(size.width), sanitize_extent(size.height))
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Returns `true` when both extents are finite and strictly positive.
#[must_use]
pub fn is_usable_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Natural extent of content made of absolutely positioned children.
///
/// The extent is the furthest `x + width` and `y + height` over all child
/// layout rectangles; children that report invalid geometry contribute
/// nothing.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use zoompan_transform::content_extent;
///
/// let children = [
///     Rect::new(0.0, 0.0, 50.0, 50.0),
///     Rect::new(50.0, 50.0, 100.0, 100.0),
/// ];
/// assert_eq!(content_extent(children), Size::new(100.0, 100.0));
/// ```
#[must_use]
pub fn content_extent(children: impl IntoIterator<Item = Rect>) -> Size {
    children.into_iter().fold(Size::ZERO, |acc, r| {
        let w = sanitize_extent(r.max_x());
        let h = sanitize_extent(r.max_y());
        Size::new(acc.width.max(w), acc.height.max(h))
    })
}

/// Source of the platform chrome inset (status bar height and similar).
///
/// Hosts implement this over whatever display metrics they have and hand it
/// to [`GeometryTracker::subscribe`] and [`GeometryTracker::on_display_change`].
pub trait InsetSource {
    /// Current vertical inset in container pixels.
    fn vertical_inset(&self) -> f64;
}

impl InsetSource for f64 {
    fn vertical_inset(&self) -> f64 {
        *self
    }
}

/// Container-space bounds used when clamping the transformed content.
///
/// The leading edges sit at the container origin. The bottom edge is pushed
/// down by the vertical inset, since content positions are compared in window
/// space while the container is measured below the platform chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    /// Container rectangle, including the vertical inset below it.
    pub rect: Rect,
    /// Vertical inset that was folded into `rect`.
    pub vertical_inset: f64,
}

impl Boundary {
    /// Builds a boundary for a container of `size` with the given inset.
    #[must_use]
    pub fn new(size: Size, vertical_inset: f64) -> Self {
        let size = sanitize_size(size);
        let vertical_inset = sanitize_extent(vertical_inset);
        Self {
            rect: Rect::new(0.0, 0.0, size.width, size.height + vertical_inset),
            vertical_inset,
        }
    }

    /// Container width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Container height, without the inset.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height() - self.vertical_inset
    }
}

/// Owns container size, content size and the vertical inset.
///
/// Sizes are replaced wholesale on each layout report and sanitized on the
/// way in, so every reader sees non-negative finite extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryTracker {
    container: Size,
    content: Size,
    inset: f64,
    subscribed: bool,
}

impl GeometryTracker {
    /// Creates a tracker with zero sizes and no inset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the container size.
    pub fn report_container_size(&mut self, size: Size) {
        let size = sanitize_size(size);
        if self.container != size {
            tracing::trace!(width = size.width, height = size.height, "container size");
            self.container = size;
        }
    }

    /// Replaces the natural, unscaled content size.
    pub fn report_content_size(&mut self, size: Size) {
        let size = sanitize_size(size);
        if self.content != size {
            tracing::trace!(width = size.width, height = size.height, "content size");
            self.content = size;
        }
    }

    /// Current container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Current content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Current vertical inset.
    #[must_use]
    pub fn vertical_inset(&self) -> f64 {
        self.inset
    }

    /// Returns `true` once both container and content have usable sizes.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        is_usable_size(self.container) && is_usable_size(self.content)
    }

    /// Boundary rectangle for the current geometry.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.container, self.inset)
    }

    /// Starts following `source` and reads its current inset.
    pub fn subscribe(&mut self, source: &impl InsetSource) {
        self.subscribed = true;
        self.inset = sanitize_extent(source.vertical_inset());
    }

    /// Re-reads the inset after the platform reports a dimension change.
    ///
    /// Ignored unless subscribed.
    pub fn on_display_change(&mut self, source: &impl InsetSource) {
        if self.subscribed {
            self.inset = sanitize_extent(source.vertical_inset());
            tracing::debug!(inset = self.inset, "vertical inset changed");
        }
    }

    /// Stops following the inset source and drops the inset to zero.
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.inset = 0.0;
    }

    /// Returns `true` while an inset source is attached.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}
