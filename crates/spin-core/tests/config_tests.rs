// Host-side tests for configuration, presets and readout formatting.

use spin_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_range_is_sane() {
    assert!(DAMPING_FACTOR_MIN > 0.0 && DAMPING_FACTOR_MIN < DAMPING_FACTOR_MAX);
    assert!(DAMPING_FACTOR_MAX < 1.0);
    assert!(damping_in_range(DEFAULT_DAMPING_FACTOR));
    assert!(DAMPING_FACTOR_STEP > 0.0);
    assert!(DEFAULT_STALL_TIMEOUT_MS > 0);
}

#[test]
fn default_config_is_the_damped_preset() {
    let config = EstimatorConfig::default();
    assert_eq!(config, EstimatorConfig::preset(Preset::Damped));
    assert!(config.damping_enabled);
    assert_eq!(config.stall_timeout_ms, Some(100));
    assert_eq!(config.stall_timeout(), Some(std::time::Duration::from_millis(100)));
    assert!(config.validate().is_ok());
}

#[test]
fn presets_validate() {
    for preset in [Preset::Damped, Preset::Plain, Preset::Stalling] {
        assert!(EstimatorConfig::preset(preset).validate().is_ok(), "{:?}", preset);
    }
    assert_eq!(EstimatorConfig::preset(Preset::Plain).stall_timeout(), None);
    assert!(!EstimatorConfig::preset(Preset::Stalling).damping_enabled);
}

#[test]
fn validation_rejects_bad_values() {
    for bad in [0.79, 1.0, f64::NAN, f64::NEG_INFINITY] {
        let config = EstimatorConfig {
            damping_factor: bad,
            ..EstimatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DampingOutOfRange(_))
        ));
    }

    let config = EstimatorConfig {
        stall_timeout_ms: Some(0),
        ..EstimatorConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroStallTimeout));
}

#[test]
fn presets_parse_from_names() {
    assert_eq!("damped".parse::<Preset>(), Ok(Preset::Damped));
    assert_eq!(" Plain ".parse::<Preset>(), Ok(Preset::Plain));
    assert_eq!("STALLING".parse::<Preset>(), Ok(Preset::Stalling));
    assert_eq!(
        "spinny".parse::<Preset>(),
        Err(ConfigError::UnknownPreset("spinny".to_string()))
    );
    for preset in [Preset::Damped, Preset::Plain, Preset::Stalling] {
        assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
    }
}

#[test]
fn readout_uses_preset_precision() {
    let metrics = Metrics {
        angular_speed: 0.159155,
        cumulative_revolutions: 0.015915,
    };

    let r = format_readout(&metrics, Preset::Damped.readout_decimals());
    assert_eq!(r.speed, "Speed: 0.16");
    assert_eq!(r.cumulate, "Cumulate: 0.02");
    assert_eq!(r.to_string(), "Speed: 0.16 | Cumulate: 0.02");

    let r = format_readout(&metrics, Preset::Stalling.readout_decimals());
    assert_eq!(r.speed, "Speed: 0.159");
    assert_eq!(r.cumulate, "Cumulate: 0.016");
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ConfigError::DampingOutOfRange(0.5).to_string(),
        "damping factor 0.5 outside [0.80, 0.99]"
    );
    assert_eq!(
        ConfigError::UnknownPreset("x".into()).to_string(),
        "unknown preset: x"
    );
}
