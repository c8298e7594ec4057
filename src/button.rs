//! Debounced mode button handling.
//!
//! The mode button is the only user interface: one debounced press advances
//! the mode cycle. The debouncer samples the line at a fixed cadence and
//! accepts the edge once it has read the active level a configured number of
//! times in a row. Sampling is bounded: a line that never stabilizes within
//! the sample cap means the edge is ignored, never an endless loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::ControlConfig;
use crate::drive::CoilDriver;
use crate::error::{DriveError, Result};
use crate::tracker::{SharedTracker, TrackerMode};

/// Bounded sampling debouncer for the mode button.
///
/// The button is wired active-low (falling-edge interrupt).
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    stable_reads: u32,
    sample_interval_us: u32,
    max_samples: u32,
}

impl Debouncer {
    /// Create a debouncer from control configuration.
    pub fn from_config(control: &ControlConfig) -> Self {
        Self {
            stable_reads: control.debounce_stable_reads,
            sample_interval_us: control.debounce_sample_interval_us,
            max_samples: control.debounce_max_samples,
        }
    }

    /// Create a debouncer from raw parameters.
    pub fn new(stable_reads: u32, sample_interval_us: u32, max_samples: u32) -> Self {
        Self {
            stable_reads,
            sample_interval_us,
            max_samples,
        }
    }

    /// Sample the button until it has held the active (low) level for the
    /// stable-read count.
    ///
    /// Returns `Ok(true)` once stabilized, `Ok(false)` if the line bounced
    /// past the sample cap. A bounce resets the stability counter rather
    /// than aborting, so chatter during the window delays acceptance
    /// instead of rejecting the press outright.
    pub fn settle<P, DLY>(&self, button: &mut P, delay: &mut DLY) -> Result<bool>
    where
        P: InputPin,
        DLY: DelayNs,
    {
        let mut consecutive = 0u32;

        for _ in 0..self.max_samples {
            if button.is_low().map_err(|_| DriveError::Pin)? {
                consecutive += 1;
                if consecutive >= self.stable_reads {
                    return Ok(true);
                }
            } else {
                consecutive = 0;
            }
            delay.delay_us(self.sample_interval_us);
        }

        Ok(false)
    }
}

/// Service a falling edge on the mode button.
///
/// Debounces first, outside any critical section: the sampling window is
/// long by design and the tick callback must stay free to fire during it.
/// Only once the press is accepted does the mode transition run, atomically,
/// through the shared tracker.
///
/// Returns the new mode, or `None` if the line never stabilized.
pub fn handle_press<P, DLY, D>(
    button: &mut P,
    delay: &mut DLY,
    debouncer: &Debouncer,
    tracker: &SharedTracker<D>,
) -> Result<Option<TrackerMode>>
where
    P: InputPin,
    DLY: DelayNs,
    D: CoilDriver,
{
    if !debouncer.settle(button, delay)? {
        return Ok(None);
    }

    let mode = tracker.toggle()?;
    Ok(Some(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn reads(states: &[PinState]) -> Vec<PinTransaction> {
        states.iter().map(|&s| PinTransaction::get(s)).collect()
    }

    #[test]
    fn test_settles_after_stable_reads() {
        let transactions = reads(&[PinState::Low; 5]);
        let mut button = PinMock::new(&transactions);
        let debouncer = Debouncer::new(5, 100, 50);

        let settled = debouncer.settle(&mut button, &mut NoopDelay::new()).unwrap();

        assert!(settled);
        button.done();
    }

    #[test]
    fn test_bounce_resets_stability_counter() {
        // Two clean reads, a bounce, then five clean reads
        let mut states = vec![PinState::Low, PinState::Low, PinState::High];
        states.extend([PinState::Low; 5]);
        let transactions = reads(&states);
        let mut button = PinMock::new(&transactions);
        let debouncer = Debouncer::new(5, 100, 50);

        let settled = debouncer.settle(&mut button, &mut NoopDelay::new()).unwrap();

        assert!(settled);
        button.done();
    }

    #[test]
    fn test_gives_up_at_sample_cap() {
        // Alternating levels never stabilize; exactly max_samples reads
        let states: Vec<PinState> = (0..10)
            .map(|i| if i % 2 == 0 { PinState::Low } else { PinState::High })
            .collect();
        let transactions = reads(&states);
        let mut button = PinMock::new(&transactions);
        let debouncer = Debouncer::new(5, 100, 10);

        let settled = debouncer.settle(&mut button, &mut NoopDelay::new()).unwrap();

        assert!(!settled);
        button.done();
    }
}
