//! Unit types for physical quantities.
//!
//! Provides type-safe representations of lengths, angles, rates, and
//! durations to prevent unit confusion at compile time.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// Linear length in centimeters.
///
/// Used for the screw-arm geometry and the insertion-rate output.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl Centimeters {
    /// Create a new Centimeters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add for Centimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Centimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Radians {
    /// Create a new Radians value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Linear rate in centimeters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct CmPerSec(pub f64);

impl CmPerSec {
    /// Create a new CmPerSec value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for CmPerSec {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Duration in seconds.
///
/// Used for step intervals and poll cadences; always strictly positive
/// once validated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to whole microseconds, rounding down (minimum 1).
    #[inline]
    pub fn as_micros(self) -> u64 {
        let us = self.0 * 1_000_000.0;
        if us < 1.0 {
            1
        } else {
            us as u64
        }
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
