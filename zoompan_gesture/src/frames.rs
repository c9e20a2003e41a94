// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized input frames.
//!
//! These mirror what a platform gesture recognizer reports. Fields are plain
//! numbers so hosts can fill them straight from native events (and, with the
//! `serde` feature, from recorded sessions).

use kurbo::{Point, Rect, Size, Vec2};

/// One frame of a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanFrame {
    /// Horizontal translation since the pan began, in screen pixels.
    pub translation_x: f64,
    /// Vertical translation since the pan began, in screen pixels.
    pub translation_y: f64,
    /// Horizontal velocity in pixels per second.
    pub velocity_x: f64,
    /// Vertical velocity in pixels per second.
    pub velocity_y: f64,
}

impl PanFrame {
    /// Creates a frame from a translation and velocity.
    #[must_use]
    pub fn new(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            translation_x: translation.x,
            translation_y: translation.y,
            velocity_x: velocity.x,
            velocity_y: velocity.y,
        }
    }

    /// Translation since the pan began.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translation_x, self.translation_y)
    }

    /// Pointer velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.velocity_x, self.velocity_y)
    }

    /// Recognizers emit zero-velocity frames while settling; they carry no
    /// new position.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity_x == 0.0 && self.velocity_y == 0.0
    }
}

/// One frame of a pinch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinchFrame {
    /// Scale factor relative to the start of this pinch.
    pub scale: f64,
    /// Focal point x in container pixels.
    pub focal_x: f64,
    /// Focal point y in container pixels.
    pub focal_y: f64,
    /// Scale velocity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub velocity: f64,
}

impl PinchFrame {
    /// Creates a frame with zero velocity.
    #[must_use]
    pub fn new(scale: f64, focal: Point) -> Self {
        Self {
            scale,
            focal_x: focal.x,
            focal_y: focal.y,
            velocity: 0.0,
        }
    }

    /// Focal point in container pixels.
    #[must_use]
    pub fn focal(&self) -> Point {
        Point::new(self.focal_x, self.focal_y)
    }

    /// Returns `true` when the scale is positive and every field is finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.focal().is_finite()
    }
}

/// A single raw tap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TapFrame {
    /// Tap x in window pixels.
    pub absolute_x: f64,
    /// Tap y in window pixels.
    pub absolute_y: f64,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
}

impl TapFrame {
    /// Tap position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.absolute_x, self.absolute_y)
    }
}

/// A layout measurement for the container or the content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutFrame {
    /// Left edge relative to the parent.
    pub x: f64,
    /// Top edge relative to the parent.
    pub y: f64,
    /// Measured width.
    pub width: f64,
    /// Measured height.
    pub height: f64,
}

impl LayoutFrame {
    /// Measured size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Measured rectangle in parent coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), self.size())
    }
}

/// Any input the controller consumes, for hosts that route through a single
/// entry point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum GestureEvent {
    /// A pan recognizer activated with this many pointers down.
    PanBegin {
        /// Pointers down.
        pointers: u32,
    },
    /// A pan frame.
    PanUpdate(PanFrame),
    /// The pan ended (pointers lifted).
    PanEnd(PanFrame),
    /// A pinch frame; the first one starts the pinch.
    PinchUpdate(PinchFrame),
    /// The pinch ended.
    PinchEnd(PinchFrame),
    /// A raw tap, counted towards the configured tap count.
    Tap(TapFrame),
    /// Container layout measured.
    ContainerLayout(LayoutFrame),
    /// Content layout measured.
    ContentLayout(LayoutFrame),
    /// Animation clock tick, in host milliseconds.
    Tick {
        /// Host timestamp in milliseconds.
        now_ms: u64,
    },
}
