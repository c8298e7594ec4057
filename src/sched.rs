//! Scheduling loop: tick rescheduling and the idle supervisor.
//!
//! Two cooperating timing sources drive the tracker. The tick path is a
//! self-rescheduling chain: every tick computes the delay for the next one,
//! because the interval is not constant while tracking. The idle supervisor
//! is a fixed low-rate poll that stops an auto-stopping rewind once the step
//! counter is back home.
//!
//! On interrupt-driven targets, arm a one-shot timer with the value returned
//! by [`tick_once`] from inside the timer callback, and call
//! [`supervise_once`] from the main loop. [`TrackerLoop`] is the blocking
//! equivalent for hosts and demos: an explicit trampoline, never recursion.

use embedded_hal::delay::DelayNs;

use crate::drive::CoilDriver;
use crate::error::Result;
use crate::tracker::{SharedTracker, TrackerMode};

/// Run one tick and return the delay, in microseconds, to arm the one-shot
/// timer with before the next tick.
pub fn tick_once<D: CoilDriver>(tracker: &SharedTracker<D>) -> Result<u64> {
    Ok(tracker.tick()?.as_micros())
}

/// Run one idle-supervisor poll.
///
/// Returns `true` if this poll detected rewind completion and stopped the
/// tracker.
pub fn supervise_once<D: CoilDriver>(tracker: &SharedTracker<D>) -> Result<bool> {
    tracker.check_rewind_complete()
}

/// Blocking trampoline interleaving the tick chain and the supervisor poll.
///
/// Each iteration sleeps for the freshly computed tick interval, then runs
/// the supervisor whenever its cadence has elapsed on the accumulated sleep
/// time.
pub struct TrackerLoop<'a, D: CoilDriver, DLY: DelayNs> {
    tracker: &'a SharedTracker<D>,
    delay: DLY,
    supervisor_interval_us: u64,
    since_supervision_us: u64,
}

impl<'a, D: CoilDriver, DLY: DelayNs> TrackerLoop<'a, D, DLY> {
    /// Create a loop over a shared tracker.
    pub fn new(tracker: &'a SharedTracker<D>, delay: DLY) -> Self {
        let supervisor_interval_us = tracker.with(|t| {
            t.model().constants().supervisor_poll_interval.as_micros()
        });
        Self {
            tracker,
            delay,
            supervisor_interval_us,
            since_supervision_us: 0,
        }
    }

    /// Run a single iteration: tick, sleep, supervise if due.
    ///
    /// Returns the mode observed after the iteration.
    pub fn run_once(&mut self) -> Result<TrackerMode> {
        let wait_us = tick_once(self.tracker)?;

        // Sleep in u32-sized chunks; stopped-mode polls exceed u32 rarely
        // but the clamp costs nothing.
        let mut remaining = wait_us;
        while remaining > 0 {
            let chunk = remaining.min(u32::MAX as u64) as u32;
            self.delay.delay_us(chunk);
            remaining -= chunk as u64;
        }

        self.since_supervision_us += wait_us;
        if self.since_supervision_us >= self.supervisor_interval_us {
            self.since_supervision_us = 0;
            supervise_once(self.tracker)?;
        }

        Ok(self.tracker.mode())
    }

    /// Run iterations until the tracker is `Stopped`.
    pub fn run_until_stopped(&mut self) -> Result<()> {
        while self.run_once()? != TrackerMode::Stopped {}
        Ok(())
    }

    /// Run a fixed number of iterations.
    pub fn run_ticks(&mut self, ticks: u32) -> Result<TrackerMode> {
        let mut mode = self.tracker.mode();
        for _ in 0..ticks {
            mode = self.run_once()?;
        }
        Ok(mode)
    }
}
