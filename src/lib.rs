//! # barndoor-tracker
//!
//! Tangent-error corrected motion core for barn-door astrophotography
//! trackers, with embedded-hal 1.0 support.
//!
//! A barn-door (scotch) mount rotates a camera platform with a linear screw.
//! Because the screw is straight and the sky turns, the screw must insert at
//! a continuously increasing rate; this crate owns that timing model, the
//! half-step coil sequencer for the drive motor, the
//! Normal / Rewinding / Stopped state machine, the debounced single-button
//! mode toggle, and the self-rescheduling step loop.
//!
//! ## Features
//!
//! - **Configuration-driven**: Geometry and loop timing in TOML files
//! - **embedded-hal 1.0**: `OutputPin` coils, `InputPin` button, `DelayNs` timing
//! - **no_std compatible**: Core library works without standard library
//! - **Interrupt-safe**: Mode transitions are atomic with respect to the
//!   tick callback (`critical-section`)
//! - **Bounded debounce**: A chattering button is ignored, never spun on
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use barndoor_tracker::{
//!     Debouncer, HalfStepDriver, SharedTracker, Tracker, TrackerLoop,
//! };
//!
//! // Load configuration from TOML (or use the reference defaults)
//! let config = barndoor_tracker::load_config("tracker.toml")?;
//!
//! // Wrap the four driver-board inputs and read the startup override
//! let driver = HalfStepDriver::new(in1, in2, in3, in4);
//! let button_held = button.is_low()?;
//!
//! let tracker = SharedTracker::new(Tracker::new(&config, driver, button_held));
//!
//! // Timer callback: step, then re-arm the one-shot timer
//! // let delay_us = barndoor_tracker::sched::tick_once(&tracker)?;
//!
//! // Or run the blocking trampoline on a host
//! let mut looper = TrackerLoop::new(&tracker, delay);
//! looper.run_until_stopped()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, and the host
//!   `critical-section` implementation
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod button;
pub mod config;
pub mod drive;
pub mod error;
pub mod sched;
pub mod timing;
pub mod tracker;

// Re-exports for ergonomic API
pub use button::{handle_press, Debouncer};
pub use config::{validate_config, ControlConfig, DriveConstants, GeometryConfig, TrackerConfig};
pub use drive::{CoilDriver, HalfStepDriver, PhaseIndex, PHASE_TABLE};
pub use error::{Error, Result};
pub use sched::{supervise_once, tick_once, TrackerLoop};
pub use timing::{TangentModel, EARTH_RATE_RAD_PER_S};
pub use tracker::{SharedTracker, Tracker, TrackerMode, TrackerState};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Centimeters, CmPerSec, Radians, Seconds};
