//! Drive module for barndoor-tracker.
//!
//! Provides the half-step phase table and the coil sequencer.

mod phase;
mod sequencer;

pub use phase::{PhaseIndex, COIL_COUNT, PHASE_COUNT, PHASE_TABLE};
pub use sequencer::{CoilDriver, HalfStepDriver};
