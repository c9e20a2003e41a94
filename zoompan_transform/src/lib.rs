// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoompan_transform --heading-base-level=0

//! Zoompan Transform: headless state for a pan/pinch-zoom viewport.
//!
//! This crate owns the numbers behind a zoomable content area inside a fixed
//! container. It focuses on:
//! - Geometry tracking: container size, content size, platform chrome inset.
//! - Transform state: base scale, live pinch multiplier, live translation and
//!   the committed offset that the next gesture is measured from.
//! - Policy: tap-to-zoom scale selection and boundary clamping.
//! - Settle animations that are interruptible by any newer write.
//!
//! It does **not** interpret gestures; `zoompan_gesture` drives this state
//! from pan, pinch and tap frames. Renderers read
//! [`TransformState::current_transform`] once per frame and never write.
//!
//! ## Coordinate model
//!
//! Translations are stored in content space. A content point `p` is drawn at
//! `scale * (p + translation)` relative to the container origin, which is
//! exactly [`ContentTransform::to_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use zoompan_transform::{
//!     ClampMode, ContentTransform, GeometryTracker, TransformState, clamp_translation,
//! };
//!
//! let mut geo = GeometryTracker::new();
//! geo.report_container_size(Size::new(400.0, 800.0));
//! geo.report_content_size(Size::new(400.0, 1600.0));
//!
//! let mut state = TransformState::new();
//! // Drag far upward, past the end of the content.
//! state.apply_live_delta(Vec2::new(0.0, -2000.0));
//!
//! // On release, clamp and animate back.
//! let t = state.current_transform();
//! let clamped = clamp_translation(
//!     t.translation,
//!     t.scale,
//!     geo.content_size(),
//!     &geo.boundary(),
//!     50.0,
//!     ClampMode::KeepSomeVisible,
//! );
//! state.settle(ContentTransform::new(t.scale, clamped), 250);
//! assert_eq!(state.committed_offset(), Vec2::new(0.0, -1550.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod geometry;
mod modes;
mod settle;
mod transform;

pub use clamp::{AxisSpan, ZoomBand, clamp_axis, clamp_translation, tap_zoom_scale};
pub use geometry::{
    Boundary, GeometryTracker, InsetSource, content_extent, is_usable_size, sanitize_size,
};
pub use modes::{ClampMode, SettleStatus};
pub use settle::{Settle, ease_out_cubic};
pub use transform::{ContentTransform, TransformState};
