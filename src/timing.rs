//! Tangent-error timing model.
//!
//! A linear-screw barn-door mount does not need a constant screw rate: as the
//! hinge opens, the screw must insert faster and faster to hold a constant
//! angular rate. This module maps elapsed tracking time to the instantaneous
//! insertion rate and from that to a per-step interval.

use libm::cos;

use crate::config::units::{CmPerSec, Seconds};
use crate::config::DriveConstants;

/// Earth's sidereal rotation rate in radians per second.
pub const EARTH_RATE_RAD_PER_S: f64 = 7.292_115e-5;

/// Pure mapping from elapsed tracking time to insertion rate and step interval.
#[derive(Debug, Clone)]
pub struct TangentModel {
    constants: DriveConstants,
}

impl TangentModel {
    /// Create a model from derived drive constants.
    pub fn new(constants: DriveConstants) -> Self {
        Self { constants }
    }

    /// Get the drive constants.
    #[inline]
    pub fn constants(&self) -> &DriveConstants {
        &self.constants
    }

    /// Required screw insertion rate after `elapsed` seconds of tracking.
    ///
    /// `rate = L * w / cos^2(theta0 + w * elapsed)` where `L` is the arm
    /// length, `w` is [`EARTH_RATE_RAD_PER_S`], and `theta0` the initial
    /// hinge angle. Strictly positive and strictly increasing below the
    /// divergence bound `theta0 + w * elapsed = pi/2` (about 359 minutes
    /// for the reference geometry); callers clamp, the model does not.
    #[inline]
    pub fn insertion_rate(&self, elapsed: Seconds) -> CmPerSec {
        let theta = self.constants.hinge_angle.value() + EARTH_RATE_RAD_PER_S * elapsed.value();
        let c = cos(theta);
        CmPerSec(self.constants.arm_length.value() * EARTH_RATE_RAD_PER_S / (c * c))
    }

    /// Step interval after `elapsed` seconds of tracking, clamped to the
    /// configured floor.
    ///
    /// Recomputed every tick; the rate changes continuously so the interval
    /// is never constant in normal tracking.
    #[inline]
    pub fn step_interval(&self, elapsed: Seconds) -> Seconds {
        self.constants
            .rate_to_interval(self.insertion_rate(elapsed).value())
    }
}
