//! Tracker operating modes.

/// Operating mode of the tracker.
///
/// Exactly one mode is active at any time. Transitions happen only through
/// the debounced button toggle or the rewind-complete check; both paths run
/// inside a critical section so a tick never observes a half-applied change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackerMode {
    /// Tracking: tangent-error corrected forward stepping.
    #[default]
    Normal,
    /// Fast double-step reverse toward the home position.
    Rewinding,
    /// No stepping; coils released, loop idles at the poll cadence.
    Stopped,
}

impl TrackerMode {
    /// Mode name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TrackerMode::Normal => "Normal",
            TrackerMode::Rewinding => "Rewinding",
            TrackerMode::Stopped => "Stopped",
        }
    }
}
