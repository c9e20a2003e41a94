// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use zoompan_transform::{
    ContentTransform, GeometryTracker, InsetSource, SettleStatus, TransformState,
    clamp_translation, tap_zoom_scale,
};

use crate::config::{ConfigError, PanZoomConfig};
use crate::frames::{GestureEvent, LayoutFrame, PanFrame, PinchFrame, TapFrame};
use crate::tap::MultiTapState;

/// Where the interpreter is in its gesture cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A pan owns the translation.
    Panning,
    /// A pinch owns the scale, possibly alongside a pan.
    Pinching,
    /// A settle animation is running.
    Settling,
}

/// Capability handed to the host so it can steer the controller without
/// reaching into gesture state.
pub trait PanZoomHandle {
    /// Overrides the pan-enabled flag regardless of zoom state.
    fn set_panning(&mut self, enabled: bool);
    /// Reports content dimensions measured out of band.
    fn report_content_size(&mut self, width: f64, height: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchSession {
    /// Base scale the pinch multiplies.
    base: f64,
    /// Content-space point held under the focal point.
    anchor: Point,
    /// Latest focal point in container pixels.
    focal: Point,
}

/// Pan / pinch-zoom controller.
///
/// Consumes pan, pinch, tap and layout frames and maintains a
/// [`TransformState`] for the renderer to read. All methods run on the host's
/// event thread; animation frames are driven through [`PanZoom::tick`].
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use zoompan_gesture::{PanFrame, PanZoom};
///
/// let mut pz = PanZoom::new();
/// pz.set_container_size(Size::new(400.0, 800.0));
/// pz.set_content_size(Size::new(400.0, 1600.0));
/// pz.set_panning(true);
///
/// assert!(pz.on_pan_begin(1));
/// let frame = PanFrame::new(Vec2::new(0.0, -300.0), Vec2::new(0.0, -900.0));
/// pz.on_pan_update(frame);
/// pz.on_pan_end(frame);
/// assert_eq!(pz.committed_offset(), Vec2::new(0.0, -300.0));
/// ```
#[derive(Clone, Debug)]
pub struct PanZoom {
    config: PanZoomConfig,
    geometry: GeometryTracker,
    state: TransformState,
    taps: MultiTapState,
    pan_enabled: bool,
    zoomed_in: bool,
    panning: bool,
    pinch: Option<PinchSession>,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self::with_config(PanZoomConfig::default())
    }
}

impl PanZoom {
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller after validating `config`.
    pub fn try_new(config: PanZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: PanZoomConfig) -> Self {
        Self {
            config,
            geometry: GeometryTracker::new(),
            state: TransformState::new(),
            taps: MultiTapState::new(config.tap_count, config.tap_interval_ms, config.tap_slop),
            pan_enabled: config.pan_enabled_initially,
            zoomed_in: false,
            panning: false,
            pinch: None,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Geometry the clamping math reads.
    #[must_use]
    pub fn geometry(&self) -> &GeometryTracker {
        &self.geometry
    }

    /// Transform state, read-only.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Transform to render this frame.
    #[must_use]
    pub fn current_transform(&self) -> ContentTransform {
        self.state.current_transform()
    }

    /// Offset the next gesture is measured from.
    #[must_use]
    pub fn committed_offset(&self) -> Vec2 {
        self.state.committed_offset()
    }

    /// Returns `true` after a commit left the content scaled above 1.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.zoomed_in
    }

    /// Returns `true` while pans may start.
    #[must_use]
    pub fn is_pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pinch.is_some() {
            GesturePhase::Pinching
        } else if self.panning {
            GesturePhase::Panning
        } else if self.state.is_settling() {
            GesturePhase::Settling
        } else {
            GesturePhase::Idle
        }
    }

    /// Focal point of the live pinch, for a debug overlay.
    #[must_use]
    pub fn focal_marker(&self) -> Option<Point> {
        self.pinch.map(|p| p.focal)
    }

    /// Overrides the pan-enabled flag regardless of zoom state.
    ///
    /// Disabling does not cut short a pan that is already running.
    pub fn set_panning(&mut self, enabled: bool) {
        if self.pan_enabled != enabled {
            tracing::debug!(enabled, "panning toggled");
        }
        self.pan_enabled = enabled;
    }

    /// Replaces the container size.
    pub fn set_container_size(&mut self, size: Size) {
        self.geometry.report_container_size(size);
    }

    /// Replaces the natural content size.
    pub fn set_content_size(&mut self, size: Size) {
        self.geometry.report_content_size(size);
    }

    /// Container layout callback.
    pub fn on_container_layout(&mut self, layout: LayoutFrame) {
        self.set_container_size(layout.size());
    }

    /// Content layout callback.
    pub fn on_content_layout(&mut self, layout: LayoutFrame) {
        self.set_content_size(layout.size());
    }

    /// Starts following a platform inset source.
    pub fn subscribe_inset(&mut self, source: &impl InsetSource) {
        self.geometry.subscribe(source);
    }

    /// Platform dimension-change callback.
    pub fn on_display_change(&mut self, source: &impl InsetSource) {
        self.geometry.on_display_change(source);
    }

    /// Stops following the inset source; call on teardown.
    pub fn unsubscribe_inset(&mut self) {
        self.geometry.unsubscribe();
    }

    /// A pan recognizer activated with `pointers` down.
    ///
    /// Returns `true` if the pan was accepted. Accepting a pan ends any
    /// running settle at its target.
    pub fn on_pan_begin(&mut self, pointers: u32) -> bool {
        if !self.pan_enabled {
            tracing::trace!("pan ignored: panning disabled");
            return false;
        }
        if pointers < self.config.min_pointers || pointers > self.config.max_pointers {
            tracing::trace!(pointers, "pan ignored: pointer count out of range");
            return false;
        }
        self.state.interrupt_settle();
        if self.pinch.is_some() {
            self.state.commit_offset();
        }
        self.panning = true;
        true
    }

    /// A pan frame.
    pub fn on_pan_update(&mut self, frame: PanFrame) {
        if !self.panning {
            return;
        }
        if frame.is_at_rest() {
            tracing::trace!("pan frame at rest, skipped");
            return;
        }
        if !self.state.apply_live_delta(frame.translation()) {
            tracing::debug!(?frame, "dropping invalid pan frame");
        }
    }

    /// The pan ended; clamps and settles unless a pinch is still live.
    pub fn on_pan_end(&mut self, frame: PanFrame) {
        if !self.panning {
            return;
        }
        self.panning = false;
        if !self.state.apply_live_delta(frame.translation()) {
            tracing::debug!(?frame, "dropping invalid pan end frame");
        }
        match self.pinch.as_mut() {
            Some(pinch) => {
                // The pinch takes the translation back from here.
                pinch.anchor = self.state.current_transform().screen_to_content(pinch.focal);
            }
            None => self.settle_committed(),
        }
    }

    /// A pinch frame; the first one starts the pinch.
    pub fn on_pinch_update(&mut self, frame: PinchFrame) {
        if !frame.is_valid() {
            tracing::debug!(?frame, "dropping invalid pinch frame");
            return;
        }
        let focal = frame.focal();
        let session = match self.pinch {
            Some(mut session) => {
                session.focal = focal;
                session
            }
            None => {
                self.state.interrupt_settle();
                if self.state.pinch_scale() != 1.0 {
                    self.state.commit_scale();
                }
                let start = self.state.current_transform();
                tracing::debug!(scale = start.scale, "pinch started");
                PinchSession {
                    base: self.state.base_scale(),
                    anchor: start.screen_to_content(focal),
                    focal,
                }
            }
        };
        let translation = if self.panning {
            None
        } else {
            let scale = session.base * frame.scale;
            Some(focal.to_vec2() / scale - session.anchor.to_vec2())
        };
        if self.state.apply_live_pinch(frame.scale, translation) {
            self.pinch = Some(session);
        }
    }

    /// The pinch ended.
    ///
    /// A pinch that leaves the content at or below 1x always snaps back to
    /// the identity transform.
    pub fn on_pinch_end(&mut self, frame: PinchFrame) {
        if self.pinch.is_none() {
            return;
        }
        if frame.is_valid() {
            self.on_pinch_update(frame);
        }
        self.pinch = None;
        let scale = self.state.effective_scale();
        if scale > 1.0 {
            tracing::debug!(scale, "pinch committed");
            self.zoomed_in = true;
            self.pan_enabled = true;
            if self.panning {
                self.state.commit_scale();
            } else {
                self.settle_committed();
            }
        } else {
            tracing::debug!(scale, "pinch ended below 1x, resetting");
            self.panning = false;
            self.zoom_out();
        }
    }

    /// A raw tap; toggles zoom once the configured count is reached.
    pub fn on_tap(&mut self, frame: TapFrame) {
        if self.pinch.is_some() {
            return;
        }
        if let Some(pos) = self.taps.on_tap(frame.position(), frame.time_ms) {
            self.on_multi_tap(pos);
        }
    }

    /// A multi-tap recognized by the host; toggles zoom.
    pub fn on_multi_tap(&mut self, position: Point) {
        if self.pinch.is_some() || !position.is_finite() {
            return;
        }
        tracing::debug!(x = position.x, y = position.y, "multi-tap");
        self.toggle_zoom();
    }

    /// Zooms out if zoomed in, else zooms in.
    pub fn toggle_zoom(&mut self) {
        if self.zoomed_in {
            self.zoom_out();
        } else {
            self.zoom_in();
        }
    }

    /// Settles into the tap zoom scale at the origin and enables panning.
    ///
    /// Returns `false` and changes nothing until both container and content
    /// have been measured.
    pub fn zoom_in(&mut self) -> bool {
        let Some(scale) = tap_zoom_scale(
            self.geometry.container_size(),
            self.geometry.content_size(),
            self.config.zoom_fill_factor,
            self.config.zoom_band,
        ) else {
            tracing::debug!("zoom in skipped: geometry not measured");
            return false;
        };
        tracing::debug!(scale, "zoom in");
        self.panning = false;
        self.zoomed_in = true;
        self.pan_enabled = true;
        self.state
            .settle(ContentTransform::new(scale, Vec2::ZERO), self.config.settle_duration_ms);
        true
    }

    /// Settles back to the identity transform and disables panning.
    pub fn zoom_out(&mut self) {
        tracing::debug!("zoom out");
        self.panning = false;
        self.zoomed_in = false;
        self.pan_enabled = false;
        self.state
            .settle(ContentTransform::IDENTITY, self.config.settle_duration_ms);
    }

    /// Returns to the identity transform at once, dropping any gesture.
    pub fn reset(&mut self) {
        self.state.reset();
        self.taps.reset();
        self.pinch = None;
        self.panning = false;
        self.zoomed_in = false;
        self.pan_enabled = self.config.pan_enabled_initially;
    }

    /// Advances the settle animation to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Option<SettleStatus> {
        self.state.tick(now_ms)
    }

    /// Routes any [`GestureEvent`] to its handler.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PanBegin { pointers } => {
                self.on_pan_begin(pointers);
            }
            GestureEvent::PanUpdate(frame) => self.on_pan_update(frame),
            GestureEvent::PanEnd(frame) => self.on_pan_end(frame),
            GestureEvent::PinchUpdate(frame) => self.on_pinch_update(frame),
            GestureEvent::PinchEnd(frame) => self.on_pinch_end(frame),
            GestureEvent::Tap(frame) => self.on_tap(frame),
            GestureEvent::ContainerLayout(layout) => self.on_container_layout(layout),
            GestureEvent::ContentLayout(layout) => self.on_content_layout(layout),
            GestureEvent::Tick { now_ms } => {
                self.tick(now_ms);
            }
        }
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            phase: self.phase(),
            transform: self.current_transform(),
            committed_offset: self.committed_offset(),
            zoomed_in: self.zoomed_in,
            pan_enabled: self.pan_enabled,
            container: self.geometry.container_size(),
            content: self.geometry.content_size(),
            vertical_inset: self.geometry.vertical_inset(),
            focal_marker: self.focal_marker(),
            revision: self.state.revision(),
        }
    }

    /// Clamps the live translation at the (capped) effective scale and
    /// settles there.
    fn settle_committed(&mut self) {
        let current = self.state.current_transform();
        let scale = match self.config.max_pinch_scale {
            Some(cap) if current.scale > cap => cap,
            _ => current.scale,
        };
        let translation = clamp_translation(
            current.translation,
            scale,
            self.geometry.content_size(),
            &self.geometry.boundary(),
            self.config.boundary_margin,
            self.config.clamp_mode,
        );
        if translation != current.translation {
            tracing::debug!(
                from_x = current.translation.x,
                from_y = current.translation.y,
                to_x = translation.x,
                to_y = translation.y,
                "snapping content back into view"
            );
        }
        self.state.settle(
            ContentTransform::new(scale, translation),
            self.config.settle_duration_ms,
        );
    }
}

impl PanZoomHandle for PanZoom {
    fn set_panning(&mut self, enabled: bool) {
        Self::set_panning(self, enabled);
    }

    fn report_content_size(&mut self, width: f64, height: f64) {
        self.set_content_size(Size::new(width, height));
    }
}

/// Debug snapshot of a [`PanZoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomDebugInfo {
    /// Current phase.
    pub phase: GesturePhase,
    /// Transform being rendered.
    pub transform: ContentTransform,
    /// Offset the next gesture is measured from.
    pub committed_offset: Vec2,
    /// Zoom toggle state.
    pub zoomed_in: bool,
    /// Pan-enabled flag.
    pub pan_enabled: bool,
    /// Container size.
    pub container: Size,
    /// Content size.
    pub content: Size,
    /// Vertical platform inset.
    pub vertical_inset: f64,
    /// Live pinch focal point.
    pub focal_marker: Option<Point>,
    /// Transform state revision.
    pub revision: u64,
}
