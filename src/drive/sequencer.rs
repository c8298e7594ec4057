//! Coil sequencer over embedded-hal output pins.

use embedded_hal::digital::OutputPin;

use crate::error::{DriveError, Result};

use super::phase::PhaseIndex;

/// Something that can energize the motor coils for a phase, or release them.
///
/// This is the seam between the motion state machine and the hardware: the
/// tick path only ever talks to a `CoilDriver`, so tests can substitute a
/// recording fake and firmware can wrap its GPIO pins.
pub trait CoilDriver {
    /// Drive the coil lines to the levels of `phase`.
    fn apply(&mut self, phase: PhaseIndex) -> Result<()>;

    /// Drive all coil lines low.
    ///
    /// Called on every transition into a stopped state so the coils never
    /// stay energized while the mount is idle. Idempotent.
    fn release(&mut self) -> Result<()>;
}

/// Half-step sequencer over four embedded-hal output pins.
///
/// Pin order matches the wiring order of [`super::PHASE_TABLE`] columns
/// (driver board inputs IN1..IN4).
pub struct HalfStepDriver<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    in1: P1,
    in2: P2,
    in3: P3,
    in4: P4,
}

impl<P1, P2, P3, P4> HalfStepDriver<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    /// Create a sequencer from the four coil pins.
    pub fn new(in1: P1, in2: P2, in3: P3, in4: P4) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Release the pins, handing them back to the caller.
    pub fn into_pins(self) -> (P1, P2, P3, P4) {
        (self.in1, self.in2, self.in3, self.in4)
    }

    fn set_levels(&mut self, levels: [bool; 4]) -> Result<()> {
        set_pin(&mut self.in1, levels[0])?;
        set_pin(&mut self.in2, levels[1])?;
        set_pin(&mut self.in3, levels[2])?;
        set_pin(&mut self.in4, levels[3])?;
        Ok(())
    }
}

fn set_pin<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| DriveError::Pin.into())
}

impl<P1, P2, P3, P4> CoilDriver for HalfStepDriver<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    fn apply(&mut self, phase: PhaseIndex) -> Result<()> {
        self.set_levels(phase.levels())
    }

    fn release(&mut self) -> Result<()> {
        self.set_levels([false; 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn expect_levels(levels: [bool; 4]) -> [Vec<PinTransaction>; 4] {
        levels.map(|high| {
            vec![PinTransaction::set(if high {
                PinState::High
            } else {
                PinState::Low
            })]
        })
    }

    #[test]
    fn test_apply_writes_table_row() {
        // Phase 2 of the half-step table is [1, 1, 0, 0]
        let [t1, t2, t3, t4] = expect_levels([true, true, false, false]);
        let mut driver = HalfStepDriver::new(
            PinMock::new(&t1),
            PinMock::new(&t2),
            PinMock::new(&t3),
            PinMock::new(&t4),
        );

        driver.apply(PhaseIndex::new(2)).unwrap();

        let (mut p1, mut p2, mut p3, mut p4) = driver.into_pins();
        p1.done();
        p2.done();
        p3.done();
        p4.done();
    }

    #[test]
    fn test_release_drives_all_low_and_is_idempotent() {
        let transactions = vec![
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ];
        let mut driver = HalfStepDriver::new(
            PinMock::new(&transactions),
            PinMock::new(&transactions),
            PinMock::new(&transactions),
            PinMock::new(&transactions),
        );

        driver.release().unwrap();
        driver.release().unwrap();

        let (mut p1, mut p2, mut p3, mut p4) = driver.into_pins();
        p1.done();
        p2.done();
        p3.done();
        p4.done();
    }

    #[test]
    fn test_full_cycle_is_periodic() {
        // Two full forward cycles replay the same transaction stream
        let mut per_pin: [Vec<PinTransaction>; 4] = [vec![], vec![], vec![], vec![]];
        for _ in 0..2 {
            for phase in 0..8u8 {
                let levels = PhaseIndex::new(phase).levels();
                for (pin, &high) in per_pin.iter_mut().zip(levels.iter()) {
                    pin.push(PinTransaction::set(if high {
                        PinState::High
                    } else {
                        PinState::Low
                    }));
                }
            }
        }

        let mut driver = HalfStepDriver::new(
            PinMock::new(&per_pin[0]),
            PinMock::new(&per_pin[1]),
            PinMock::new(&per_pin[2]),
            PinMock::new(&per_pin[3]),
        );

        let mut index = PhaseIndex::default();
        for _ in 0..16 {
            driver.apply(index).unwrap();
            index = index.advance(1);
        }

        let (mut p1, mut p2, mut p3, mut p4) = driver.into_pins();
        p1.done();
        p2.done();
        p3.done();
        p4.done();
    }
}
