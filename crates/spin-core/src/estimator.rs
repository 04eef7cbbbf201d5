//! Rotational motion estimator.
//!
//! Turns timestamped pointer positions around a pivot into two readings: a
//! (optionally damped) angular speed in revolutions per second, and the number
//! of clockwise revolutions accumulated so far. Counter-clockwise motion is
//! ignored rather than subtracted, so the revolution count behaves like a
//! one-way odometer.

use glam::DVec2;

use crate::angle::{pointer_angle, wrap_delta};
use crate::config::{ConfigError, EstimatorConfig};
use crate::constants::{damping_in_range, FULL_TURN};

/// Snapshot published to the display after every update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Revolutions per second, never negative.
    pub angular_speed: f64,
    pub cumulative_revolutions: f64,
}

#[derive(Clone, Debug)]
pub struct RotationEstimator {
    config: EstimatorConfig,
    last_angle: Option<f64>,
    last_timestamp_ms: Option<f64>,
    total_angle: f64,
    current_speed: f64,
}

impl Default for RotationEstimator {
    fn default() -> Self {
        Self::with_valid_config(EstimatorConfig::default())
    }
}

impl RotationEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EstimatorConfig) -> Self {
        Self {
            config,
            last_angle: None,
            last_timestamp_ms: None,
            total_angle: 0.0,
            current_speed: 0.0,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// True once a baseline sample has been recorded.
    pub fn is_tracking(&self) -> bool {
        self.last_angle.is_some()
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            angular_speed: self.current_speed,
            cumulative_revolutions: self.total_angle / FULL_TURN,
        }
    }

    /// Feed one pointer sample. `center` is re-read by the host per event.
    pub fn observe(&mut self, point: DVec2, timestamp_ms: f64, center: DVec2) -> Metrics {
        self.try_observe(point, timestamp_ms, center)
            .unwrap_or_else(|| self.metrics())
    }

    /// Like [`observe`](Self::observe), but `None` when the sample was dropped
    /// as non-finite and left the state untouched.
    pub fn try_observe(
        &mut self,
        point: DVec2,
        timestamp_ms: f64,
        center: DVec2,
    ) -> Option<Metrics> {
        let angle = pointer_angle(point, center);
        if !angle.is_finite() || !timestamp_ms.is_finite() {
            log::warn!(
                "[estimator] dropping non-finite sample point=({}, {}) t={}",
                point.x,
                point.y,
                timestamp_ms
            );
            return None;
        }

        if let (Some(last_angle), Some(last_ts)) = (self.last_angle, self.last_timestamp_ms) {
            let delta = wrap_delta(angle - last_angle);
            if delta > 0.0 {
                self.total_angle += delta;
                let dt_sec = (timestamp_ms - last_ts) / 1000.0;
                if dt_sec > 0.0 {
                    let speed = self.speed_for(delta, dt_sec);
                    // A vanishing dt overflows the division; keep the last reading.
                    if speed.is_finite() {
                        self.current_speed = speed;
                    } else {
                        log::warn!(
                            "[estimator] non-finite speed for dt={:e}s, keeping {:.4}",
                            dt_sec,
                            self.current_speed
                        );
                    }
                }
                log::trace!(
                    "[estimator] delta={:.4} dt={:.4}s speed={:.4}",
                    delta,
                    dt_sec,
                    self.current_speed
                );
            }
        }

        // The unwrap reference follows the pointer even when the step was rejected.
        self.last_angle = Some(angle);
        self.last_timestamp_ms = Some(timestamp_ms);
        Some(self.metrics())
    }

    fn speed_for(&self, delta: f64, dt_sec: f64) -> f64 {
        let raw = delta.abs() / (dt_sec * FULL_TURN);
        if self.config.damping_enabled {
            raw * self.config.damping_factor.powf(dt_sec)
        } else {
            raw
        }
    }

    /// Called by the idle watchdog; drops speed to zero, keeps the revolution count.
    pub fn on_idle(&mut self) -> Metrics {
        self.current_speed = 0.0;
        self.metrics()
    }

    /// Zeroes the revolution count. Angle history is kept so tracking
    /// continues across the reset without a new baseline sample.
    pub fn reset(&mut self) -> Metrics {
        self.total_angle = 0.0;
        log::debug!("[estimator] reset");
        self.metrics()
    }

    /// Forget the previous sample; the next one becomes a fresh baseline.
    pub fn clear_history(&mut self) {
        self.last_angle = None;
        self.last_timestamp_ms = None;
    }

    pub fn set_damping_factor(&mut self, value: f64) -> Result<(), ConfigError> {
        if !damping_in_range(value) {
            return Err(ConfigError::DampingOutOfRange(value));
        }
        self.config.damping_factor = value;
        log::debug!("[estimator] damping factor={:.2}", value);
        Ok(())
    }

    pub fn set_damping_enabled(&mut self, enabled: bool) {
        self.config.damping_enabled = enabled;
        log::debug!("[estimator] damping enabled={}", enabled);
    }
}
