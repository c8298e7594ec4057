//! Screw-arm geometry configuration from TOML.

use serde::Deserialize;

use super::units::{Centimeters, Radians};

/// Barn-door geometry and gear-train configuration.
///
/// Defaults reproduce the reference build: a 28.884 cm arm, a hinge angle
/// of 0.012566 rad measured between the two boards at rest, an M5-class
/// rod at 7.8740157 rotations/cm, and a 28BYJ-48 gear train doing 2048
/// double-steps per output rotation.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryConfig {
    /// Distance from hinge to drive screw in centimeters.
    #[serde(default = "default_arm_length", rename = "arm_length_cm")]
    pub arm_length: Centimeters,

    /// Initial hinge angle at the fully rewound position, in radians.
    #[serde(default = "default_hinge_angle", rename = "hinge_angle_rad")]
    pub hinge_angle: Radians,

    /// Screw pitch in rotations per centimeter of insertion.
    #[serde(default = "default_rotations_per_cm")]
    pub rotations_per_cm: f64,

    /// Drive steps per screw rotation (double-steps for half-step drive).
    #[serde(default = "default_steps_per_rotation")]
    pub steps_per_rotation: f64,
}

fn default_arm_length() -> Centimeters {
    Centimeters(28.884)
}

fn default_hinge_angle() -> Radians {
    Radians(0.012566)
}

fn default_rotations_per_cm() -> f64 {
    7.874_015_7
}

fn default_steps_per_rotation() -> f64 {
    2048.0
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            arm_length: default_arm_length(),
            hinge_angle: default_hinge_angle(),
            rotations_per_cm: default_rotations_per_cm(),
            steps_per_rotation: default_steps_per_rotation(),
        }
    }
}

impl GeometryConfig {
    /// Drive steps per centimeter of screw insertion.
    #[inline]
    pub fn steps_per_cm(&self) -> f64 {
        self.rotations_per_cm * self.steps_per_rotation
    }
}
