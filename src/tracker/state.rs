//! Motion state machine.
//!
//! Owns the tracking clock, the step counters, and the autostop flag, and
//! decides on every tick which interval and direction apply.

use crate::config::units::Seconds;
use crate::drive::{CoilDriver, PhaseIndex};
use crate::error::Result;
use crate::timing::TangentModel;

use super::mode::TrackerMode;

/// Phase stride for a tracking step.
pub const TRACK_STRIDE: i8 = 1;

/// Phase stride for a rewind step (double-step magnitude, reverse).
pub const REWIND_STRIDE: i8 = -2;

/// Shared motion state: mode, tracking clock, and step counters.
///
/// Mutated only inside the tick callback, the toggle handler, or the idle
/// supervisor, each of which the caller runs under a critical section (see
/// [`super::SharedTracker`]).
#[derive(Debug, Clone)]
pub struct TrackerState {
    mode: TrackerMode,
    /// Accumulated tracking seconds; advances only in Normal.
    elapsed: Seconds,
    /// Current phase within the half-step table.
    phase: PhaseIndex,
    /// Net steps since the last reset; positive is forward, home is <= 0.
    total_steps: i64,
    /// False only during a manual rewind started at power-on.
    autostop: bool,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerState {
    /// Create the state for a default startup: tracking from time zero.
    pub fn new() -> Self {
        Self {
            mode: TrackerMode::Normal,
            elapsed: Seconds(0.0),
            phase: PhaseIndex::default(),
            total_steps: 0,
            autostop: true,
        }
    }

    /// Create the state for power-on with the mode button read as held.
    ///
    /// A held button means the user wants a manual rewind: start in
    /// `Rewinding` with autostop disabled, so the rewind runs until the
    /// button is pressed again.
    pub fn with_startup_override(button_held: bool) -> Self {
        if button_held {
            Self {
                mode: TrackerMode::Rewinding,
                autostop: false,
                ..Self::new()
            }
        } else {
            Self::new()
        }
    }

    /// Current operating mode.
    #[inline]
    pub fn mode(&self) -> TrackerMode {
        self.mode
    }

    /// Accumulated tracking time.
    #[inline]
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    /// Current phase index in `[0, 8)`.
    #[inline]
    pub fn phase(&self) -> PhaseIndex {
        self.phase
    }

    /// Net steps since the last reset.
    #[inline]
    pub fn total_steps(&self) -> i64 {
        self.total_steps
    }

    /// Whether the rewind auto-stops at home.
    #[inline]
    pub fn autostop(&self) -> bool {
        self.autostop
    }

    /// Run one tick: step if the mode calls for it, then return the interval
    /// to wait before the next tick.
    ///
    /// - `Normal`: interval from the tangent-error model at the current
    ///   clock value; step forward; advance the clock by the interval.
    /// - `Rewinding`: fixed fast interval; double-step backward; the clock
    ///   is untouched.
    /// - `Stopped`: no stepping; return the idle poll interval.
    pub fn tick<D: CoilDriver>(&mut self, model: &TangentModel, driver: &mut D) -> Result<Seconds> {
        match self.mode {
            TrackerMode::Stopped => Ok(model.constants().stopped_poll_interval),
            TrackerMode::Rewinding => {
                self.step(REWIND_STRIDE, driver)?;
                Ok(model.constants().rewind_interval)
            }
            TrackerMode::Normal => {
                let interval = model.step_interval(self.elapsed);
                self.step(TRACK_STRIDE, driver)?;
                self.elapsed = self.elapsed + interval;
                Ok(interval)
            }
        }
    }

    /// Apply a debounced button press: advance the mode cycle.
    ///
    /// `Normal -> Rewinding -> Stopped -> Normal`. Stopping a rewind always
    /// releases the coils; stopping a manual rewind (autostop disabled)
    /// additionally re-enables autostop and zeroes the clock and counters,
    /// re-arming a fresh tracking run from time zero.
    pub fn toggle<D: CoilDriver>(&mut self, driver: &mut D) -> Result<TrackerMode> {
        match self.mode {
            TrackerMode::Normal => {
                self.mode = TrackerMode::Rewinding;
            }
            TrackerMode::Rewinding => {
                self.mode = TrackerMode::Stopped;
                driver.release()?;
                if !self.autostop {
                    self.autostop = true;
                    self.reset_counters();
                }
            }
            TrackerMode::Stopped => {
                // Resume from the current clock value; a stop is a pause,
                // not a reset.
                self.mode = TrackerMode::Normal;
            }
        }
        Ok(self.mode)
    }

    /// Idle-supervisor check: stop an auto-stopping rewind once home.
    ///
    /// Returns `true` if the rewind completed and the tracker was stopped.
    /// The rewind stride is -2, so the counter may land at -1; it is clamped
    /// back to exactly 0 so the next run starts from a clean baseline.
    pub fn check_rewind_complete<D: CoilDriver>(&mut self, driver: &mut D) -> Result<bool> {
        if self.mode == TrackerMode::Rewinding && self.autostop && self.total_steps <= 0 {
            self.mode = TrackerMode::Stopped;
            driver.release()?;
            self.total_steps = 0;
            self.elapsed = Seconds(0.0);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn step<D: CoilDriver>(&mut self, stride: i8, driver: &mut D) -> Result<()> {
        self.phase = self.phase.advance(stride);
        self.total_steps += stride as i64;
        driver.apply(self.phase)
    }

    fn reset_counters(&mut self) {
        self.elapsed = Seconds(0.0);
        self.phase = PhaseIndex::default();
        self.total_steps = 0;
    }
}
