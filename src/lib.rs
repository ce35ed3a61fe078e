//! Track Race
//!
//! A single-window animation: three runners on concentric circular
//! tracks, each pacing at a fixed random angular speed, racing until the
//! track-0 runner completes five laps.

pub mod race;
pub mod ui;

pub use race::controller::RaceController;
pub use ui::RaceApp;
