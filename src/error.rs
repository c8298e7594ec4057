//! Error types for barndoor-tracker.
//!
//! Provides unified error handling across configuration and coil-drive operations.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all tracker operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Coil drive error
    Drive(DriveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid screw-arm length (must be > 0)
    InvalidArmLength(f64),
    /// Invalid initial hinge angle (must be in [0, pi/2))
    InvalidHingeAngle(f64),
    /// Invalid screw pitch (must be > 0 rotations per cm)
    InvalidScrewPitch(f64),
    /// Invalid steps per rotation (must be > 0)
    InvalidStepsPerRotation(f64),
    /// Invalid interval value (must be > 0 seconds)
    InvalidInterval {
        /// Which interval field was rejected
        field: &'static str,
        /// Rejected value in seconds
        value: f64,
    },
    /// Invalid debounce parameter (must be > 0)
    InvalidDebounce {
        /// Which debounce field was rejected
        field: &'static str,
        /// Rejected value
        value: u32,
    },
    /// Debounce sample cap smaller than the required stable-read count
    DebounceCapTooSmall {
        /// Required consecutive stable reads
        stable_reads: u32,
        /// Configured total sample cap
        max_samples: u32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Coil drive errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveError {
    /// GPIO pin operation failed
    Pin,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidArmLength(v) => {
                write!(f, "Invalid arm length: {} cm. Must be > 0", v)
            }
            ConfigError::InvalidHingeAngle(v) => {
                write!(f, "Invalid hinge angle: {} rad. Must be in [0, pi/2)", v)
            }
            ConfigError::InvalidScrewPitch(v) => {
                write!(f, "Invalid screw pitch: {} rotations/cm. Must be > 0", v)
            }
            ConfigError::InvalidStepsPerRotation(v) => {
                write!(f, "Invalid steps per rotation: {}. Must be > 0", v)
            }
            ConfigError::InvalidInterval { field, value } => {
                write!(f, "Invalid {}: {} s. Must be > 0", field, value)
            }
            ConfigError::InvalidDebounce { field, value } => {
                write!(f, "Invalid {}: {}. Must be > 0", field, value)
            }
            ConfigError::DebounceCapTooSmall {
                stable_reads,
                max_samples,
            } => {
                write!(
                    f,
                    "Debounce sample cap {} is smaller than the stable-read count {}",
                    max_samples, stable_reads
                )
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Pin => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}
