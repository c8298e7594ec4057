//! Configuration module for barndoor-tracker.
//!
//! Provides types for loading and validating tracker geometry and control
//! parameters from TOML files (with `std` feature) or pre-parsed data.

mod control;
mod derived;
mod geometry;
#[cfg(feature = "std")]
mod loader;
pub mod units;
mod validation;

use serde::Deserialize;

pub use control::ControlConfig;
pub use derived::DriveConstants;
pub use geometry::GeometryConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Centimeters, CmPerSec, Radians, Seconds};

/// Complete tracker configuration.
///
/// Both sections are optional in the TOML; omitted values fall back to the
/// reference build's measured constants.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerConfig {
    /// Screw-arm geometry and gear train.
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// Loop timing and debounce parameters.
    #[serde(default)]
    pub control: ControlConfig,
}

impl TrackerConfig {
    /// Compute the derived drive constants for this configuration.
    pub fn drive_constants(&self) -> DriveConstants {
        DriveConstants::from_config(&self.geometry, &self.control)
    }
}
