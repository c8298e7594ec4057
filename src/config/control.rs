//! Control-loop timing and debounce configuration from TOML.

use serde::Deserialize;

use super::units::Seconds;

/// Runtime timing and button-debounce parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlConfig {
    /// Fixed step interval while rewinding, in seconds.
    #[serde(default = "default_rewind_interval", rename = "rewind_interval_s")]
    pub rewind_interval: Seconds,

    /// Poll interval while stopped, in seconds.
    #[serde(default = "default_stopped_poll", rename = "stopped_poll_interval_s")]
    pub stopped_poll_interval: Seconds,

    /// Floor for the tracking step interval, in seconds.
    ///
    /// The tangent-error rate diverges for long exposures; the motor cannot
    /// physically step faster than this, so computed intervals are clamped.
    #[serde(default = "default_min_interval", rename = "min_step_interval_s")]
    pub min_step_interval: Seconds,

    /// Idle-supervisor poll interval for rewind-complete detection, in seconds.
    #[serde(default = "default_supervisor_poll", rename = "supervisor_poll_interval_s")]
    pub supervisor_poll_interval: Seconds,

    /// Consecutive consistent button samples required to accept an edge.
    #[serde(default = "default_stable_reads", rename = "debounce_stable_reads")]
    pub debounce_stable_reads: u32,

    /// Spacing between debounce samples, in microseconds.
    #[serde(default = "default_sample_interval_us", rename = "debounce_sample_interval_us")]
    pub debounce_sample_interval_us: u32,

    /// Total debounce sample cap before the edge is ignored.
    #[serde(default = "default_max_samples", rename = "debounce_max_samples")]
    pub debounce_max_samples: u32,
}

fn default_rewind_interval() -> Seconds {
    Seconds(0.003)
}

fn default_stopped_poll() -> Seconds {
    Seconds(0.2)
}

fn default_min_interval() -> Seconds {
    Seconds(0.002)
}

fn default_supervisor_poll() -> Seconds {
    Seconds(0.05)
}

fn default_stable_reads() -> u32 {
    20
}

fn default_sample_interval_us() -> u32 {
    500
}

fn default_max_samples() -> u32 {
    200
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            rewind_interval: default_rewind_interval(),
            stopped_poll_interval: default_stopped_poll(),
            min_step_interval: default_min_interval(),
            supervisor_poll_interval: default_supervisor_poll(),
            debounce_stable_reads: default_stable_reads(),
            debounce_sample_interval_us: default_sample_interval_us(),
            debounce_max_samples: default_max_samples(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControlConfig::default();

        assert!((config.rewind_interval.value() - 0.003).abs() < 1e-12);
        assert!((config.stopped_poll_interval.value() - 0.2).abs() < 1e-12);
        assert_eq!(config.debounce_stable_reads, 20);
        assert!(config.debounce_max_samples > config.debounce_stable_reads);
    }
}
