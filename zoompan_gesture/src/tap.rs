// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-tap recognizer: count consecutive taps and report when enough land.
//!
//! ## Usage
//!
//! 1) Create a [`MultiTapState`] with the tap count, interval and slop to use.
//! 2) Feed every raw tap to [`MultiTapState::on_tap`].
//! 3) When it returns `Some`, the configured number of taps has landed close
//!    enough together; the returned point is the last tap. The count resets.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoompan_gesture::tap::MultiTapState;
//!
//! let mut taps = MultiTapState::new(2, 300, 20.0);
//! assert_eq!(taps.on_tap(Point::new(10.0, 10.0), 1_000), None);
//! assert_eq!(
//!     taps.on_tap(Point::new(12.0, 11.0), 1_150),
//!     Some(Point::new(12.0, 11.0))
//! );
//! ```

use kurbo::Point;

/// Tracks a run of taps towards a required count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiTapState {
    required: u32,
    max_interval_ms: u64,
    slop: f64,
    count: u32,
    last: Option<(Point, u64)>,
}

impl MultiTapState {
    /// Creates a recognizer firing after `required` taps, each within
    /// `max_interval_ms` and `slop` pixels of the previous one.
    ///
    /// A `required` of zero is treated as one.
    #[must_use]
    pub fn new(required: u32, max_interval_ms: u64, slop: f64) -> Self {
        Self {
            required: required.max(1),
            max_interval_ms,
            slop,
            count: 0,
            last: None,
        }
    }

    /// Records a tap, returning its position when it completes the run.
    ///
    /// Taps with non-finite positions are dropped and break the run.
    pub fn on_tap(&mut self, pos: Point, time_ms: u64) -> Option<Point> {
        if !pos.is_finite() {
            self.reset();
            return None;
        }
        let continues = self.last.is_some_and(|(last_pos, last_time)| {
            time_ms >= last_time
                && time_ms - last_time <= self.max_interval_ms
                && (pos - last_pos).hypot2() <= self.slop * self.slop
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((pos, time_ms));
        if self.count >= self.required {
            self.reset();
            Some(pos)
        } else {
            None
        }
    }

    /// Taps counted in the current run.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Taps needed to complete a run.
    #[must_use]
    pub fn required(&self) -> u32 {
        self.required
    }

    /// Forgets the current run.
    pub fn reset(&mut self) {
        self.count = 0;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::MultiTapState;

    #[test]
    fn fires_on_required_count_and_resets() {
        let mut taps = MultiTapState::new(3, 300, 20.0);
        let p = Point::new(100.0, 100.0);
        assert_eq!(taps.on_tap(p, 0), None);
        assert_eq!(taps.on_tap(p, 200), None);
        assert_eq!(taps.count(), 2);
        assert_eq!(taps.on_tap(p, 400), Some(p));
        assert_eq!(taps.count(), 0);
        // A fresh run starts from one.
        assert_eq!(taps.on_tap(p, 500), None);
        assert_eq!(taps.count(), 1);
    }

    #[test]
    fn slow_taps_restart_the_run() {
        let mut taps = MultiTapState::new(2, 300, 20.0);
        let p = Point::new(5.0, 5.0);
        assert_eq!(taps.on_tap(p, 0), None);
        assert_eq!(taps.on_tap(p, 301), None);
        assert_eq!(taps.count(), 1);
        assert_eq!(taps.on_tap(p, 500), Some(p));
    }

    #[test]
    fn distant_taps_restart_the_run() {
        let mut taps = MultiTapState::new(2, 300, 20.0);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 0), None);
        assert_eq!(taps.on_tap(Point::new(30.0, 0.0), 100), None);
        assert_eq!(taps.count(), 1);
        assert_eq!(
            taps.on_tap(Point::new(40.0, 0.0), 200),
            Some(Point::new(40.0, 0.0))
        );
    }

    #[test]
    fn out_of_order_timestamps_restart_the_run() {
        let mut taps = MultiTapState::new(2, 300, 20.0);
        let p = Point::new(1.0, 1.0);
        taps.on_tap(p, 1_000);
        assert_eq!(taps.on_tap(p, 900), None);
        assert_eq!(taps.count(), 1);
    }

    #[test]
    fn single_tap_config_fires_every_tap() {
        let mut taps = MultiTapState::new(0, 300, 20.0);
        assert_eq!(taps.required(), 1);
        let p = Point::new(3.0, 4.0);
        assert_eq!(taps.on_tap(p, 0), Some(p));
    }

    #[test]
    fn nan_tap_breaks_the_run() {
        let mut taps = MultiTapState::new(2, 300, 20.0);
        let p = Point::new(1.0, 1.0);
        taps.on_tap(p, 0);
        assert_eq!(taps.on_tap(Point::new(f64::NAN, 1.0), 50), None);
        assert_eq!(taps.count(), 0);
    }
}
