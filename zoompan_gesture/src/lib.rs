// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoompan_gesture --heading-base-level=0

//! Zoompan Gesture: turn multi-touch gesture frames into a content transform.
//!
//! [`PanZoom`] is a small state machine driven by three gesture sources and
//! by layout reports:
//!
//! - **Pan** frames move the content. Deltas are divided by the current scale
//!   so the content tracks the finger at any zoom. Frames at rest (zero
//!   velocity on both axes) are skipped.
//! - **Pinch** frames scale the content around the focal point. When a pan
//!   runs at the same time, the pinch owns the scale and the pan owns the
//!   translation.
//! - **Taps** are counted by [`tap::MultiTapState`]; reaching the configured
//!   count toggles between the identity transform and a zoomed-in scale
//!   derived from the container/content ratio.
//!
//! When the last gesture ends the transform is committed: content dragged
//! fully out of the container is pulled back so a margin stays reachable, and
//! a pinch that ends at or below 1x always returns to the identity transform.
//! Corrections run as settle animations advanced by [`PanZoom::tick`]; any
//! new gesture supersedes them immediately.
//!
//! ## Phases
//!
//! ```text
//! Idle ──pan begin──▶ Panning ──second pointer──▶ Pinching
//!   ▲                    │                           │
//!   │                    └────── all lifted / tap ───┴──▶ Settling
//!   └──────────────── animation done or superseded ◀─────────┘
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoompan_gesture::{PanZoom, PinchFrame};
//!
//! let mut pz = PanZoom::new();
//! pz.set_container_size(Size::new(400.0, 800.0));
//! pz.set_content_size(Size::new(400.0, 800.0));
//!
//! let focal = Point::new(200.0, 400.0);
//! pz.on_pinch_update(PinchFrame::new(1.5, focal));
//! pz.on_pinch_update(PinchFrame::new(2.0, focal));
//! pz.on_pinch_end(PinchFrame::new(2.0, focal));
//!
//! // Let the settle run out.
//! pz.tick(0);
//! pz.tick(1_000);
//!
//! assert!(pz.is_zoomed_in());
//! assert!(pz.is_pan_enabled());
//! assert_eq!(pz.current_transform().scale, 2.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`PanZoomConfig`] and
//!   every input frame, so configuration and recorded sessions can be loaded
//!   from JSON or similar.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod frames;
mod interpreter;
pub mod tap;

pub use config::{ConfigError, PanZoomConfig};
pub use frames::{GestureEvent, LayoutFrame, PanFrame, PinchFrame, TapFrame};
pub use interpreter::{GesturePhase, PanZoom, PanZoomDebugInfo, PanZoomHandle};
pub use zoompan_transform::{ClampMode, ContentTransform, SettleStatus, ZoomBand};
