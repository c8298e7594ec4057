//! Simulated tracking session on a host machine.
//!
//! Runs the tracker with a console driver instead of GPIO: a short stretch of
//! tangent-error tracking, a button press, and a rewind to home. Time is
//! simulated, so the whole session finishes instantly.
//!
//! Run with: `cargo run --example simulated_tracking`

use barndoor_tracker::{
    CoilDriver, PhaseIndex, Result, SharedTracker, Tracker, TrackerConfig, TrackerLoop,
    TrackerMode,
};

use embedded_hal::delay::DelayNs;

/// Counts steps instead of toggling pins.
#[derive(Default)]
struct ConsoleDriver {
    applies: u64,
}

impl CoilDriver for ConsoleDriver {
    fn apply(&mut self, _phase: PhaseIndex) -> Result<()> {
        self.applies += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        println!("  [coils released]");
        Ok(())
    }
}

/// Accumulates requested delays instead of sleeping.
#[derive(Default)]
struct SimClock {
    elapsed_us: u64,
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_us += (ns / 1_000) as u64;
    }
}

fn main() -> Result<()> {
    let config = TrackerConfig::default();
    println!(
        "barn-door tracker: {} cm arm, {:.0} steps/cm",
        config.geometry.arm_length.value(),
        config.geometry.steps_per_cm()
    );

    let tracker = SharedTracker::new(Tracker::new(&config, ConsoleDriver::default(), false));
    let mut clock = SimClock::default();

    {
        let mut looper = TrackerLoop::new(&tracker, &mut clock);

        println!("tracking 200 steps...");
        looper.run_ticks(200)?;
    }

    tracker.with(|t| {
        println!(
            "  clock: {:.2} s, steps: {}, phase: {}",
            t.state().elapsed().value(),
            t.state().total_steps(),
            t.state().phase().value()
        );
    });

    println!("button press: {:?} -> {:?}", TrackerMode::Normal, tracker.toggle()?);

    {
        let mut looper = TrackerLoop::new(&tracker, &mut clock);
        println!("rewinding to home...");
        looper.run_until_stopped()?;
    }

    tracker.with(|t| {
        println!(
            "  mode: {}, steps: {}, clock: {:.2} s",
            t.mode().name(),
            t.state().total_steps(),
            t.state().elapsed().value()
        );
    });
    println!("simulated wall time: {:.2} s", clock.elapsed_us as f64 / 1e6);

    Ok(())
}
