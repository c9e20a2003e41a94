// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Zoompan demos: logging setup and session replay.

use serde::Deserialize;
use zoompan_gesture::{ConfigError, GestureEvent, PanZoom, PanZoomConfig};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to
/// `info` plus controller debug output.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,zoompan_gesture=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A recorded gesture session.
#[derive(Debug, Deserialize)]
pub struct Session {
    /// Controller configuration; omitted fields take their defaults.
    #[serde(default)]
    pub config: PanZoomConfig,
    /// Events in arrival order.
    pub events: Vec<GestureEvent>,
}

impl Session {
    /// Parses a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Feeds every event to a fresh controller, logging the transform after
    /// each one.
    pub fn replay(&self) -> Result<PanZoom, ConfigError> {
        let mut pz = PanZoom::try_new(self.config)?;
        for (i, event) in self.events.iter().enumerate() {
            pz.handle(*event);
            log_state(i, &pz);
        }
        Ok(pz)
    }
}

/// Logs the controller's phase and transform.
pub fn log_state(step: usize, pz: &PanZoom) {
    let t = pz.current_transform();
    tracing::info!(
        step,
        phase = ?pz.phase(),
        scale = t.scale,
        translate_x = t.translate_x(),
        translate_y = t.translate_y(),
        zoomed_in = pz.is_zoomed_in(),
        pan_enabled = pz.is_pan_enabled(),
        "state"
    );
}

/// Ticks the animation clock in 16 ms frames until nothing is settling,
/// returning the final timestamp.
pub fn drain_settle(pz: &mut PanZoom, mut now_ms: u64) -> u64 {
    while pz.tick(now_ms).is_some() {
        now_ms += 16;
    }
    now_ms
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use zoompan_gesture::{GesturePhase, PanZoom};

    use super::{Session, drain_settle};

    const OVERSCROLL: &str = include_str!("../sessions/overscroll.json");

    #[test]
    fn bundled_session_replays_to_a_clamped_offset() {
        let session = Session::from_json(OVERSCROLL).unwrap();
        assert_eq!(session.config.tap_count, 2);
        let mut pz = session.replay().unwrap();
        drain_settle(&mut pz, 10_000);
        assert_eq!(pz.phase(), GesturePhase::Idle);
        assert_eq!(pz.committed_offset(), Vec2::new(0.0, -1550.0));
    }

    #[test]
    fn drain_stops_once_idle() {
        let mut pz = PanZoom::new();
        assert_eq!(drain_settle(&mut pz, 42), 42);
    }
}
