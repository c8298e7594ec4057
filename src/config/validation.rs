//! Configuration validation.

use core::f64::consts::FRAC_PI_2;

use crate::error::{ConfigError, Error, Result};

use super::TrackerConfig;

/// Validate a tracker configuration.
///
/// Checks:
/// - Geometry values are strictly positive
/// - Hinge angle lies in [0, pi/2)
/// - All intervals are strictly positive
/// - Debounce parameters are nonzero and the sample cap can actually be met
pub fn validate_config(config: &TrackerConfig) -> Result<()> {
    validate_geometry(config)?;
    validate_control(config)?;
    Ok(())
}

fn validate_geometry(config: &TrackerConfig) -> Result<()> {
    let geometry = &config.geometry;

    if geometry.arm_length.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidArmLength(
            geometry.arm_length.value(),
        )));
    }

    let theta0 = geometry.hinge_angle.value();
    if !(0.0..FRAC_PI_2).contains(&theta0) {
        return Err(Error::Config(ConfigError::InvalidHingeAngle(theta0)));
    }

    if geometry.rotations_per_cm <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidScrewPitch(
            geometry.rotations_per_cm,
        )));
    }

    if geometry.steps_per_rotation <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRotation(
            geometry.steps_per_rotation,
        )));
    }

    Ok(())
}

fn validate_control(config: &TrackerConfig) -> Result<()> {
    let control = &config.control;

    let intervals = [
        ("rewind interval", control.rewind_interval),
        ("stopped poll interval", control.stopped_poll_interval),
        ("minimum step interval", control.min_step_interval),
        ("supervisor poll interval", control.supervisor_poll_interval),
    ];
    for (field, value) in intervals {
        if value.value() <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidInterval {
                field,
                value: value.value(),
            }));
        }
    }

    if control.debounce_stable_reads == 0 {
        return Err(Error::Config(ConfigError::InvalidDebounce {
            field: "debounce stable-read count",
            value: control.debounce_stable_reads,
        }));
    }

    if control.debounce_sample_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidDebounce {
            field: "debounce sample interval",
            value: control.debounce_sample_interval_us,
        }));
    }

    if control.debounce_max_samples < control.debounce_stable_reads {
        return Err(Error::Config(ConfigError::DebounceCapTooSmall {
            stable_reads: control.debounce_stable_reads,
            max_samples: control.debounce_max_samples,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Centimeters, Radians, Seconds};

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackerConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_arm_length() {
        let mut config = TrackerConfig::default();
        config.geometry.arm_length = Centimeters(0.0);

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidArmLength(0.0)))
        );
    }

    #[test]
    fn test_rejects_hinge_angle_past_quarter_turn() {
        let mut config = TrackerConfig::default();
        config.geometry.hinge_angle = Radians(1.6);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidHingeAngle(_)))
        ));
    }

    #[test]
    fn test_rejects_negative_interval() {
        let mut config = TrackerConfig::default();
        config.control.min_step_interval = Seconds(-0.001);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidInterval { .. }))
        ));
    }

    #[test]
    fn test_rejects_unreachable_debounce_cap() {
        let mut config = TrackerConfig::default();
        config.control.debounce_max_samples = 5;

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::DebounceCapTooSmall {
                stable_reads: 20,
                max_samples: 5,
            }))
        );
    }
}
