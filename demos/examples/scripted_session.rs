// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pan / pinch / double-tap session over a diagonal strip of tiles.
//!
//! Twenty 50x50 tiles sit on a diagonal; the content size is derived from
//! their layouts. A host-side toggle enables panning, the user drags the
//! content off screen, pinches in, and double-taps back out.
//!
//! Run:
//! - `cargo run -p zoompan_demos --example scripted_session`

use kurbo::{Point, Rect, Size, Vec2};
use zoompan_demos::{drain_settle, init_tracing, log_state};
use zoompan_gesture::{PanFrame, PanZoom, PanZoomConfig, PanZoomHandle, PinchFrame, TapFrame};
use zoompan_transform::content_extent;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = PanZoomConfig {
        tap_count: 2,
        ..PanZoomConfig::default()
    };
    let mut pz = PanZoom::try_new(config)?;
    pz.set_container_size(Size::new(390.0, 760.0));
    pz.subscribe_inset(&24.0);

    let tiles = (0..20).map(|i| {
        let o = f64::from(i) * 50.0;
        Rect::new(o, o, o + 50.0, o + 50.0)
    });
    let extent = content_extent(tiles);
    {
        // What a host holding only the handle would do.
        let handle: &mut dyn PanZoomHandle = &mut pz;
        handle.report_content_size(extent.width, extent.height);
        handle.set_panning(true);
    }
    let mut step = 0;
    let mut now = 0;
    log_state(step, &pz);

    // Drag far up and to the left, past the end of the content.
    pz.on_pan_begin(1);
    for k in 1..=10 {
        let t = Vec2::new(-150.0, -120.0) * f64::from(k);
        pz.on_pan_update(PanFrame::new(t, Vec2::new(-900.0, -720.0)));
        step += 1;
        log_state(step, &pz);
    }
    pz.on_pan_end(PanFrame::new(Vec2::new(-1500.0, -1200.0), Vec2::ZERO));
    now = drain_settle(&mut pz, now);
    step += 1;
    log_state(step, &pz);

    // Pinch in around the middle of the container.
    let focal = Point::new(195.0, 380.0);
    for k in 0..=8 {
        pz.on_pinch_update(PinchFrame::new(1.0 + 0.125 * f64::from(k), focal));
        step += 1;
        log_state(step, &pz);
        if let Some(marker) = pz.focal_marker() {
            tracing::trace!(x = marker.x, y = marker.y, "focal marker");
        }
    }
    pz.on_pinch_end(PinchFrame::new(2.0, focal));
    now = drain_settle(&mut pz, now);
    step += 1;
    log_state(step, &pz);

    // Double tap: zoomed in, so this zooms back out.
    for dt in [0, 140] {
        pz.on_tap(TapFrame {
            absolute_x: 100.0,
            absolute_y: 100.0,
            time_ms: now + dt,
        });
    }
    now = drain_settle(&mut pz, now + 140);
    step += 1;
    log_state(step, &pz);

    pz.unsubscribe_inset();
    println!("final at t={now}ms: {:?}", pz.debug_info());
    Ok(())
}
