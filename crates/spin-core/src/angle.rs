//! Angle helpers for pointer positions around a pivot.
//!
//! Screen coordinates grow downward on the y axis, so a positive angle delta
//! corresponds to clockwise motion as seen on screen.

use std::f64::consts::PI;

use glam::DVec2;

use crate::constants::FULL_TURN;

/// Angle of `point` around `center` in radians, normalized to (−π, π].
#[inline]
pub fn pointer_angle(point: DVec2, center: DVec2) -> f64 {
    let offset = point - center;
    let angle = offset.y.atan2(offset.x);
    // atan2 yields −π for (−x, −0.0)
    if angle <= -PI {
        angle + FULL_TURN
    } else {
        angle
    }
}

/// Folds a raw angle difference into (−π, π] so crossing the ±π seam reads
/// as a small step instead of a near full turn.
#[inline]
pub fn wrap_delta(delta: f64) -> f64 {
    if delta > PI {
        delta - FULL_TURN
    } else if delta <= -PI {
        // Exactly −π folds to +π and so counts as a clockwise half turn.
        delta + FULL_TURN
    } else {
        delta
    }
}
