// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a recorded gesture session.
//!
//! Reads a JSON session (config plus event list) from the path given on the
//! command line, or the bundled overscroll session, and logs the transform
//! after every event.
//!
//! Run:
//! - `cargo run -p zoompan_demos --example replay_session`
//! - `cargo run -p zoompan_demos --example replay_session -- path/to/session.json`

use zoompan_demos::{Session, drain_settle, init_tracing, log_state};

const BUNDLED: &str = include_str!("../sessions/overscroll.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUNDLED.to_owned(),
    };
    let session = Session::from_json(&json)?;
    let mut pz = session.replay()?;

    let now = drain_settle(&mut pz, 60_000);
    log_state(session.events.len(), &pz);
    println!("final: {:?} at t={now}ms", pz.debug_info());
    Ok(())
}
