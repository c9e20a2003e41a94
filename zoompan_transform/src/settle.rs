// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::transform::ContentTransform;

/// Ease-out cubic curve on `[0, 1]`.
///
/// Fast at the start and gentle on arrival, which reads like a damped spring
/// without overshoot.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// A time-based transition between two transforms.
///
/// The clock starts on the first [`Settle::sample`]; timestamps are host
/// milliseconds from any monotonic origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    from: ContentTransform,
    to: ContentTransform,
    start_ms: Option<u64>,
    duration_ms: u64,
}

impl Settle {
    /// Creates a settle from `from` to `to`.
    #[must_use]
    pub fn new(from: ContentTransform, to: ContentTransform, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms,
        }
    }

    /// Transform the animation ends on.
    #[must_use]
    pub fn target(&self) -> ContentTransform {
        self.to
    }

    /// Samples the animation at `now_ms`, returning the frame and whether it
    /// is the final one.
    pub fn sample(&mut self, now_ms: u64) -> (ContentTransform, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        if self.duration_ms == 0 {
            return (self.to, true);
        }
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        (self.from.lerp(self.to, ease_out_cubic(t)), false)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Settle, ease_out_cubic};
    use crate::transform::ContentTransform;

    #[test]
    fn easing_hits_endpoints_and_is_monotonic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(4.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=10 {
            let v = ease_out_cubic(f64::from(i) / 10.0);
            assert!(v > prev, "easing must increase");
            prev = v;
        }
        // Ease-out: past the linear midpoint at half time.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn clock_starts_on_first_sample() {
        let to = ContentTransform::new(2.0, Vec2::new(10.0, 0.0));
        let mut s = Settle::new(ContentTransform::IDENTITY, to, 100);
        let (first, done) = s.sample(5_000);
        assert!(!done);
        assert_eq!(first, ContentTransform::IDENTITY);

        let (mid, done) = s.sample(5_050);
        assert!(!done);
        assert!(mid.scale > 1.5 && mid.scale < 2.0);

        let (last, done) = s.sample(5_100);
        assert!(done);
        assert_eq!(last, to);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let to = ContentTransform::new(1.4, Vec2::ZERO);
        let mut s = Settle::new(ContentTransform::IDENTITY, to, 0);
        assert_eq!(s.sample(0), (to, true));
    }
}
