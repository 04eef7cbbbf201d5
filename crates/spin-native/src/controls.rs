use glam::DVec2;
use spin_core::{Preset, DAMPING_FACTOR_MAX, DAMPING_FACTOR_MIN, DAMPING_FACTOR_STEP};

pub const PRESET_ENV: &str = "SPIN_PRESET";

/// Pivot for a window of the given inner size, in physical pixels.
#[inline]
pub fn window_center(width: u32, height: u32) -> DVec2 {
    DVec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0)
}

/// Arrow-key adjustment of the damping factor, mirroring the web slider:
/// snapped to the step and held inside the slider range.
pub fn nudge_damping(current: f64, steps: i32) -> f64 {
    let target = current + f64::from(steps) * DAMPING_FACTOR_STEP;
    ((target / DAMPING_FACTOR_STEP).round() * DAMPING_FACTOR_STEP)
        .clamp(DAMPING_FACTOR_MIN, DAMPING_FACTOR_MAX)
}

pub fn preset_from_env(value: Option<String>) -> Preset {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("[config] {} in {}, using default preset", e, PRESET_ENV);
            Preset::default()
        }),
        None => Preset::default(),
    }
}
