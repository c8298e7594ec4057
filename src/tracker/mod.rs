//! Tracker module for barndoor-tracker.
//!
//! Provides the mode state machine and the interrupt-safe shared tracker.

mod mode;
mod shared;
mod state;

pub use mode::TrackerMode;
pub use shared::{SharedTracker, Tracker};
pub use state::{TrackerState, REWIND_STRIDE, TRACK_STRIDE};
