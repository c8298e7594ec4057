//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::TrackerConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use barndoor_tracker::load_config;
///
/// let config = load_config("tracker.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrackerConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<TrackerConfig> {
    let config: TrackerConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert!((config.geometry.arm_length.value() - 28.884).abs() < 1e-9);
        assert_eq!(config.control.debounce_stable_reads, 20);
    }

    #[test]
    fn test_parse_geometry_overrides() {
        let toml = r#"
[geometry]
arm_length_cm = 30.0
hinge_angle_rad = 0.01
rotations_per_cm = 10.0
steps_per_rotation = 4096.0
"#;

        let config = parse_config(toml).unwrap();
        assert!((config.geometry.arm_length.value() - 30.0).abs() < 1e-9);
        assert!((config.geometry.steps_per_cm() - 40_960.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_control_overrides() {
        let toml = r#"
[control]
rewind_interval_s = 0.002
debounce_stable_reads = 10
debounce_max_samples = 50
"#;

        let config = parse_config(toml).unwrap();
        assert!((config.control.rewind_interval.value() - 0.002).abs() < 1e-12);
        assert_eq!(config.control.debounce_stable_reads, 10);
    }

    #[test]
    fn test_parse_rejects_invalid_geometry() {
        let toml = r#"
[geometry]
arm_length_cm = -1.0
"#;

        assert!(parse_config(toml).is_err());
    }
}
