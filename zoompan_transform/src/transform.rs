// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::modes::SettleStatus;
use crate::settle::Settle;

/// Uniform scale plus a content-space translation.
///
/// A content point `p` lands at `scale * (p + translation)` in container
/// space, so a translation of `t` moves the content by `scale * t` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    /// Effective scale.
    pub scale: f64,
    /// Translation in content space (applied before scaling).
    pub translation: Vec2,
}

impl ContentTransform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Horizontal translation in content space.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.translation.x
    }

    /// Vertical translation in content space.
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.translation.y
    }

    /// Translation in container pixels.
    #[must_use]
    pub fn screen_translation(&self) -> Vec2 {
        self.translation * self.scale
    }

    /// Affine mapping content space into container space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(self.translation)
    }

    /// Maps a container-space point into content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        (pt.to_vec2() / self.scale - self.translation).to_point()
    }

    /// Returns `true` when every component is finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.translation.is_finite()
    }

    /// Linear interpolation towards `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            translation: self.translation.lerp(other.translation, t),
        }
    }
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Owned, versioned transform state.
///
/// Holds the committed base scale, the in-flight pinch multiplier, the live
/// translation, and the committed offset that the next gesture delta is
/// measured from. Every live write bumps [`TransformState::revision`] and
/// force-stops any running settle at its target, so an interrupted animation
/// can never write over a newer value.
///
/// ```rust
/// use kurbo::Vec2;
/// use zoompan_transform::TransformState;
///
/// let mut state = TransformState::new();
/// state.apply_live_delta(Vec2::new(30.0, -10.0));
/// state.commit();
/// assert_eq!(state.committed_offset(), Vec2::new(30.0, -10.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransformState {
    base_scale: f64,
    pinch_scale: f64,
    translation: Vec2,
    committed: Vec2,
    revision: u64,
    settle: Option<Settle>,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformState {
    /// Identity state with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_scale: 1.0,
            pinch_scale: 1.0,
            translation: Vec2::ZERO,
            committed: Vec2::ZERO,
            revision: 0,
            settle: None,
        }
    }

    /// Current transform; the scale is always `base_scale * pinch_scale`.
    #[must_use]
    pub fn current_transform(&self) -> ContentTransform {
        ContentTransform::new(self.effective_scale(), self.translation)
    }

    /// Committed base scale.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    /// Live pinch multiplier, `1.0` outside a pinch.
    #[must_use]
    pub fn pinch_scale(&self) -> f64 {
        self.pinch_scale
    }

    /// `base_scale * pinch_scale`.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        self.base_scale * self.pinch_scale
    }

    /// Offset the next gesture delta is applied to.
    #[must_use]
    pub fn committed_offset(&self) -> Vec2 {
        self.committed
    }

    /// Monotonic write counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a settle animation is in flight.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Transform a running settle will end on.
    #[must_use]
    pub fn settle_target(&self) -> Option<ContentTransform> {
        self.settle.as_ref().map(Settle::target)
    }

    /// Sets the translation to `committed + delta / scale`.
    ///
    /// `delta` is in screen pixels, so dividing by the effective scale keeps
    /// the content moving with the finger at any zoom. Non-finite input is
    /// dropped and `false` returned.
    pub fn apply_live_delta(&mut self, delta: Vec2) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.interrupt();
        let next = self.committed + delta / self.effective_scale();
        if !next.is_finite() {
            return false;
        }
        self.translation = next;
        self.bump();
        true
    }

    /// Writes a live pinch multiplier and, optionally, a translation.
    ///
    /// Returns `false` and writes nothing if the values are not usable.
    pub fn apply_live_pinch(&mut self, pinch_scale: f64, translation: Option<Vec2>) -> bool {
        if !(pinch_scale.is_finite() && pinch_scale > 0.0) {
            return false;
        }
        if translation.is_some_and(|t| !t.is_finite()) {
            return false;
        }
        self.interrupt();
        self.pinch_scale = pinch_scale;
        if let Some(t) = translation {
            self.translation = t;
        }
        self.bump();
        true
    }

    /// Folds the pinch multiplier into the base scale and commits the
    /// translation as the new offset.
    pub fn commit(&mut self) {
        self.interrupt();
        self.base_scale = self.effective_scale();
        self.pinch_scale = 1.0;
        self.committed = self.translation;
        self.bump();
    }

    /// Folds the pinch multiplier into the base scale, leaving the
    /// translation and committed offset alone.
    ///
    /// Used when a pinch ends while a pan still owns the translation.
    pub fn commit_scale(&mut self) {
        self.interrupt();
        self.base_scale = self.effective_scale();
        self.pinch_scale = 1.0;
        self.bump();
    }

    /// Makes the live translation the base for the next delta, leaving the
    /// scale alone.
    ///
    /// Used when a pan joins a pinch that has been moving the content.
    pub fn commit_offset(&mut self) {
        self.interrupt();
        self.committed = self.translation;
        self.bump();
    }

    /// Animates towards `target` over `duration_ms`.
    ///
    /// The pinch multiplier is folded into the base scale and the committed
    /// offset jumps to the target at once, so a gesture that interrupts the
    /// animation measures its deltas from where the content is heading.
    /// Invalid targets are ignored.
    pub fn settle(&mut self, target: ContentTransform, duration_ms: u64) {
        if !target.is_valid() {
            tracing::debug!(?target, "ignoring invalid settle target");
            return;
        }
        self.interrupt();
        let from = self.current_transform();
        self.base_scale = from.scale;
        self.pinch_scale = 1.0;
        self.committed = target.translation;
        self.bump();
        if duration_ms == 0 || from == target {
            self.write(target);
            return;
        }
        self.settle = Some(Settle::new(from, target, duration_ms));
    }

    /// Advances a running settle to `now_ms`.
    ///
    /// Returns `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<SettleStatus> {
        let settle = self.settle.as_mut()?;
        let (frame, done) = settle.sample(now_ms);
        self.write(frame);
        if done {
            self.settle = None;
            Some(SettleStatus::Finished)
        } else {
            Some(SettleStatus::Running)
        }
    }

    /// Returns to the identity transform without animating.
    pub fn reset(&mut self) {
        self.settle = None;
        self.base_scale = 1.0;
        self.pinch_scale = 1.0;
        self.translation = Vec2::ZERO;
        self.committed = Vec2::ZERO;
        self.bump();
    }

    /// Ends a running settle by jumping to its target.
    ///
    /// Returns `true` if an animation was running. Called implicitly by every
    /// live write; gesture starts call it directly.
    pub fn interrupt_settle(&mut self) -> bool {
        self.interrupt()
    }

    fn interrupt(&mut self) -> bool {
        let Some(settle) = self.settle.take() else {
            return false;
        };
        tracing::trace!("settle interrupted");
        self.write(settle.target());
        self.bump();
        true
    }

    fn write(&mut self, t: ContentTransform) {
        self.base_scale = t.scale;
        self.pinch_scale = 1.0;
        self.translation = t.translation;
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ContentTransform, TransformState};
    use crate::modes::SettleStatus;

    #[test]
    fn live_delta_is_scale_compensated() {
        let mut state = TransformState::new();
        state.settle(ContentTransform::new(2.0, Vec2::new(10.0, 10.0)), 0);
        state.apply_live_delta(Vec2::new(100.0, -40.0));
        let t = state.current_transform();
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.translation, Vec2::new(60.0, -10.0));
        // Not committed until the gesture ends.
        assert_eq!(state.committed_offset(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn live_delta_rejects_nan() {
        let mut state = TransformState::new();
        let rev = state.revision();
        assert!(!state.apply_live_delta(Vec2::new(f64::NAN, 1.0)));
        assert_eq!(state.current_transform(), ContentTransform::IDENTITY);
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn commit_folds_pinch_into_base() {
        let mut state = TransformState::new();
        assert!(state.apply_live_pinch(2.0, Some(Vec2::new(-50.0, -25.0))));
        assert_eq!(state.current_transform().scale, 2.0);
        assert_eq!(state.base_scale(), 1.0);
        state.commit();
        assert_eq!(state.base_scale(), 2.0);
        assert_eq!(state.pinch_scale(), 1.0);
        assert_eq!(state.committed_offset(), Vec2::new(-50.0, -25.0));
    }

    #[test]
    fn pinch_rejects_non_positive_scale() {
        let mut state = TransformState::new();
        assert!(!state.apply_live_pinch(0.0, None));
        assert!(!state.apply_live_pinch(f64::NAN, None));
        assert!(!state.apply_live_pinch(1.5, Some(Vec2::new(f64::INFINITY, 0.0))));
        assert_eq!(state.current_transform(), ContentTransform::IDENTITY);
    }

    #[test]
    fn settle_animates_and_finishes() {
        let mut state = TransformState::new();
        let target = ContentTransform::new(1.5, Vec2::new(-20.0, 0.0));
        state.settle(target, 200);
        assert!(state.is_settling());
        assert_eq!(state.committed_offset(), target.translation);

        assert_eq!(state.tick(1_000), Some(SettleStatus::Running));
        assert_eq!(state.current_transform(), ContentTransform::IDENTITY);
        assert_eq!(state.tick(1_100), Some(SettleStatus::Running));
        let mid = state.current_transform();
        assert!(mid.scale > 1.0 && mid.scale < 1.5);
        assert_eq!(state.tick(1_200), Some(SettleStatus::Finished));
        assert_eq!(state.current_transform(), target);
        assert_eq!(state.tick(1_300), None);
    }

    #[test]
    fn live_write_supersedes_settle() {
        let mut state = TransformState::new();
        let target = ContentTransform::new(1.5, Vec2::new(-20.0, 0.0));
        state.settle(target, 200);
        state.tick(0);
        state.tick(50);
        let rev = state.revision();

        state.apply_live_delta(Vec2::new(15.0, 0.0));
        assert!(!state.is_settling());
        assert!(state.revision() > rev);
        // Jumped to the target scale; delta measured from the target offset.
        let t = state.current_transform();
        assert_eq!(t.scale, 1.5);
        assert_eq!(t.translation, Vec2::new(-10.0, 0.0));

        // Later ticks never clobber the live value.
        assert_eq!(state.tick(500), None);
        assert_eq!(state.current_transform(), t);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut state = TransformState::new();
        state.apply_live_pinch(3.0, Some(Vec2::new(5.0, 5.0)));
        state.commit();
        state.settle(ContentTransform::new(1.2, Vec2::ZERO), 100);
        state.reset();
        assert!(!state.is_settling());
        assert_eq!(state.current_transform(), ContentTransform::IDENTITY);
        assert_eq!(state.committed_offset(), Vec2::ZERO);
    }

    #[test]
    fn transform_maps_points_both_ways() {
        let t = ContentTransform::new(2.0, Vec2::new(10.0, -5.0));
        let p = Point::new(3.0, 4.0);
        let screen = t.to_affine() * p;
        assert_eq!(screen, Point::new(26.0, -2.0));
        assert_eq!(t.screen_to_content(screen), p);
        assert_eq!(t.screen_translation(), Vec2::new(20.0, -10.0));
    }
}
