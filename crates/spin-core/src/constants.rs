use std::f64::consts::TAU;

// Shared estimator tuning constants used by both web and native frontends.

// Geometry
pub const FULL_TURN: f64 = TAU; // radians per revolution

// Damping
pub const DAMPING_FACTOR_MIN: f64 = 0.80; // strongest decay the slider allows
pub const DAMPING_FACTOR_MAX: f64 = 0.99; // weakest decay the slider allows
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.99;
pub const DAMPING_FACTOR_STEP: f64 = 0.01; // slider / arrow-key increment

// Idle watchdog
pub const DEFAULT_STALL_TIMEOUT_MS: u32 = 100; // quiet window before speed drops to zero

// Readout
pub const DEFAULT_DECIMALS: usize = 2;
pub const FINE_DECIMALS: usize = 3; // used by the stalling preset

#[inline]
pub fn damping_in_range(value: f64) -> bool {
    value.is_finite() && (DAMPING_FACTOR_MIN..=DAMPING_FACTOR_MAX).contains(&value)
}
