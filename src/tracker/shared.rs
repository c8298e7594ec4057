//! Tracker bundle and its interrupt-safe shared wrapper.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::units::Seconds;
use crate::config::TrackerConfig;
use crate::drive::CoilDriver;
use crate::error::Result;
use crate::timing::TangentModel;

use super::mode::TrackerMode;
use super::state::TrackerState;

/// State machine, timing model, and coil driver bundled as one unit.
///
/// Everything a tick or a toggle touches lives here, so guarding the bundle
/// guards every shared mutation.
pub struct Tracker<D: CoilDriver> {
    state: TrackerState,
    model: TangentModel,
    driver: D,
}

impl<D: CoilDriver> Tracker<D> {
    /// Build a tracker from configuration.
    ///
    /// `button_held` is the mode button's instantaneous level at power-on;
    /// held means a manual rewind override (see
    /// [`TrackerState::with_startup_override`]).
    pub fn new(config: &TrackerConfig, driver: D, button_held: bool) -> Self {
        #[cfg(feature = "defmt")]
        if button_held {
            defmt::info!("mode button held at power-on: manual rewind, autostop off");
        }

        Self {
            state: TrackerState::with_startup_override(button_held),
            model: TangentModel::new(config.drive_constants()),
            driver,
        }
    }

    /// The motion state.
    #[inline]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// The timing model.
    #[inline]
    pub fn model(&self) -> &TangentModel {
        &self.model
    }

    /// Current operating mode.
    #[inline]
    pub fn mode(&self) -> TrackerMode {
        self.state.mode()
    }

    /// Run one tick; returns the delay before the next tick.
    pub fn tick(&mut self) -> Result<Seconds> {
        self.state.tick(&self.model, &mut self.driver)
    }

    /// Apply a debounced button press.
    pub fn toggle(&mut self) -> Result<TrackerMode> {
        self.state.toggle(&mut self.driver)
    }

    /// Idle-supervisor check for rewind completion.
    pub fn check_rewind_complete(&mut self) -> Result<bool> {
        self.state.check_rewind_complete(&mut self.driver)
    }
}

/// A [`Tracker`] shared between the timer callback, the button interrupt,
/// and the idle loop.
///
/// Every access runs inside a `critical_section`, so a mode transition is
/// atomic with respect to the tick callback. This closes the window the
/// reference design left open, where a tick could fire mid-toggle and step
/// with a stale mode.
pub struct SharedTracker<D: CoilDriver> {
    inner: Mutex<RefCell<Tracker<D>>>,
}

impl<D: CoilDriver> SharedTracker<D> {
    /// Wrap a tracker for shared use.
    pub const fn new(tracker: Tracker<D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(tracker)),
        }
    }

    /// Run `f` on the tracker inside a critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut Tracker<D>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Run one tick inside a critical section.
    pub fn tick(&self) -> Result<Seconds> {
        self.with(|tracker| tracker.tick())
    }

    /// Apply a debounced button press inside a critical section.
    pub fn toggle(&self) -> Result<TrackerMode> {
        self.with(|tracker| tracker.toggle())
    }

    /// Idle-supervisor check inside a critical section.
    pub fn check_rewind_complete(&self) -> Result<bool> {
        self.with(|tracker| tracker.check_rewind_complete())
    }

    /// Current mode (snapshot).
    pub fn mode(&self) -> TrackerMode {
        self.with(|tracker| tracker.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::PhaseIndex;

    struct NullDriver;

    impl CoilDriver for NullDriver {
        fn apply(&mut self, _phase: PhaseIndex) -> Result<()> {
            Ok(())
        }

        fn release(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_shared_toggle_cycles_modes() {
        let config = TrackerConfig::default();
        let shared = SharedTracker::new(Tracker::new(&config, NullDriver, false));

        assert_eq!(shared.mode(), TrackerMode::Normal);
        assert_eq!(shared.toggle().unwrap(), TrackerMode::Rewinding);
        assert_eq!(shared.toggle().unwrap(), TrackerMode::Stopped);
        assert_eq!(shared.toggle().unwrap(), TrackerMode::Normal);
    }

    #[test]
    fn test_shared_tick_returns_positive_interval() {
        let config = TrackerConfig::default();
        let shared = SharedTracker::new(Tracker::new(&config, NullDriver, false));

        let interval = shared.tick().unwrap();
        assert!(interval.value() > 0.0);
    }
}
