// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior applied when a gesture commits.
///
/// Consulted by [`crate::clamp_translation`] and by the settle step that
/// follows a pan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampMode {
    /// Do not apply any clamping; the content may be dragged anywhere.
    None,
    /// Snap content back when it has been dragged completely out of the
    /// container on an axis, leaving a margin of it reachable.
    ///
    /// Partial overflow is left alone.
    #[default]
    KeepSomeVisible,
}

/// Phase of a [`crate::Settle`] animation after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleStatus {
    /// The animation wrote an intermediate frame and wants more ticks.
    Running,
    /// The animation wrote its final frame.
    Finished,
}
