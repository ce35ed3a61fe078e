//! Race Module
//!
//! Tick-driven race state: runners, derived track geometry, the
//! controller that owns them, and the fixed-period tick schedule.

pub mod controller;
pub mod runner;
pub mod ticker;
pub mod track;

pub use controller::{Placements, RaceController, TickOutcome};
pub use runner::Runner;
pub use ticker::Ticker;
