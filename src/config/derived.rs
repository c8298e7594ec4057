//! Drive constants derived from tracker configuration.

use super::control::ControlConfig;
use super::geometry::GeometryConfig;
use super::units::{Centimeters, Radians, Seconds};

/// Derived drive parameters computed from geometry and control configuration.
///
/// These are computed once at initialization and consulted on every tick.
#[derive(Debug, Clone)]
pub struct DriveConstants {
    /// Distance from hinge to drive screw in centimeters.
    pub arm_length: Centimeters,

    /// Initial hinge angle at the rewound position in radians.
    pub hinge_angle: Radians,

    /// Drive steps per centimeter of screw insertion
    /// (rotations_per_cm x steps_per_rotation).
    pub steps_per_cm: f64,

    /// Floor for the tracking step interval in seconds.
    pub min_step_interval: Seconds,

    /// Fixed rewind step interval in seconds.
    pub rewind_interval: Seconds,

    /// Poll interval while stopped in seconds.
    pub stopped_poll_interval: Seconds,

    /// Idle-supervisor poll interval in seconds.
    pub supervisor_poll_interval: Seconds,
}

impl DriveConstants {
    /// Compute drive constants from configuration.
    pub fn from_config(geometry: &GeometryConfig, control: &ControlConfig) -> Self {
        Self {
            arm_length: geometry.arm_length,
            hinge_angle: geometry.hinge_angle,
            steps_per_cm: geometry.steps_per_cm(),
            min_step_interval: control.min_step_interval,
            rewind_interval: control.rewind_interval,
            stopped_poll_interval: control.stopped_poll_interval,
            supervisor_poll_interval: control.supervisor_poll_interval,
        }
    }

    /// Convert a linear insertion rate in cm/s to a step interval in seconds,
    /// clamped to the configured floor.
    #[inline]
    pub fn rate_to_interval(&self, rate_cm_per_s: f64) -> Seconds {
        let steps_per_s = self.steps_per_cm * rate_cm_per_s;
        if steps_per_s <= 0.0 {
            // A non-positive rate cannot schedule; fall back to the poll cadence.
            return self.stopped_poll_interval;
        }
        let interval = 1.0 / steps_per_s;
        if interval < self.min_step_interval.value() {
            self.min_step_interval
        } else {
            Seconds(interval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_constants() -> DriveConstants {
        DriveConstants::from_config(&GeometryConfig::default(), &ControlConfig::default())
    }

    #[test]
    fn test_steps_per_cm_product() {
        let constants = make_constants();

        // 7.8740157 * 2048
        assert!((constants.steps_per_cm - 16_125.984).abs() < 0.1);
    }

    #[test]
    fn test_rate_to_interval() {
        let constants = make_constants();

        // 0.002106 cm/s * 16126 steps/cm = 33.96 steps/s -> 29.4 ms
        let interval = constants.rate_to_interval(0.002_106);
        assert!((interval.value() - 0.029_4).abs() < 1e-3);
    }

    #[test]
    fn test_interval_clamped_to_floor() {
        let constants = make_constants();

        // An absurd rate must clamp at the floor, never reach zero
        let interval = constants.rate_to_interval(1.0e9);
        assert_eq!(interval, constants.min_step_interval);
        assert!(interval.value() > 0.0);
    }
}
