use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    damping_in_range, DEFAULT_DAMPING_FACTOR, DEFAULT_DECIMALS, DEFAULT_STALL_TIMEOUT_MS,
    FINE_DECIMALS,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("damping factor {0} outside [0.80, 0.99]")]
    DampingOutOfRange(f64),

    #[error("stall timeout must be at least 1 ms")]
    ZeroStallTimeout,

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Tuning for a [`RotationEstimator`](crate::RotationEstimator) and its idle watchdog.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorConfig {
    pub damping_enabled: bool,
    pub damping_factor: f64,
    /// `None` disables the idle watchdog; speed then holds its last value.
    pub stall_timeout_ms: Option<u32>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::preset(Preset::Damped)
    }
}

impl EstimatorConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Damped => Self {
                damping_enabled: true,
                damping_factor: DEFAULT_DAMPING_FACTOR,
                stall_timeout_ms: Some(DEFAULT_STALL_TIMEOUT_MS),
            },
            Preset::Plain => Self {
                damping_enabled: false,
                damping_factor: DEFAULT_DAMPING_FACTOR,
                stall_timeout_ms: None,
            },
            Preset::Stalling => Self {
                damping_enabled: false,
                damping_factor: DEFAULT_DAMPING_FACTOR,
                stall_timeout_ms: Some(DEFAULT_STALL_TIMEOUT_MS),
            },
        }
    }

    /// Rejects (never clamps) out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !damping_in_range(self.damping_factor) {
            return Err(ConfigError::DampingOutOfRange(self.damping_factor));
        }
        if self.stall_timeout_ms == Some(0) {
            return Err(ConfigError::ZeroStallTimeout);
        }
        Ok(())
    }

    pub fn stall_timeout(&self) -> Option<Duration> {
        self.stall_timeout_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }
}

/// Named configurations matching the three widget flavours the tracker ships with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Damped speed with a slider-controlled factor and an idle watchdog.
    #[default]
    Damped,
    /// Raw speed, no watchdog.
    Plain,
    /// Raw speed with an idle watchdog and a finer readout.
    Stalling,
}

impl Preset {
    pub fn readout_decimals(self) -> usize {
        match self {
            Preset::Stalling => FINE_DECIMALS,
            Preset::Damped | Preset::Plain => DEFAULT_DECIMALS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Damped => "damped",
            Preset::Plain => "plain",
            Preset::Stalling => "stalling",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "damped" => Ok(Preset::Damped),
            "plain" => Ok(Preset::Plain),
            "stalling" => Ok(Preset::Stalling),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}
