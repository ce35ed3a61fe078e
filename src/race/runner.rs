//! Runner - Individual runner state and behavior
//!
//! Each runner is bound to one track and advances by a fixed angular
//! speed every tick. The speed is drawn once at construction and never
//! changes afterwards.

use rand::Rng;

/// Number of runners (one per track).
pub const NUM_RUNNERS: usize = 3;

/// Bounds of the speed draw, in whole degrees per tick (upper exclusive).
const MIN_SPEED_DEG: u32 = 5;
const MAX_SPEED_DEG: u32 = 15;

/// State of a single runner on its track.
#[derive(Debug, Clone)]
pub struct Runner {
    /// Track this runner is bound to (0 = outermost), fixed at creation
    track_index: usize,
    /// Current position along the track, in radians past the start line
    angle: f64,
    /// Advancement per tick, in radians; strictly positive and constant
    angular_speed: f64,
}

impl Runner {
    /// Create a runner with an explicit angular speed (radians per tick).
    pub fn new(track_index: usize, angular_speed: f64) -> Self {
        debug_assert!(angular_speed > 0.0);
        Self {
            track_index,
            angle: 0.0,
            angular_speed,
        }
    }

    /// Create a runner with a speed drawn uniformly from the standard
    /// range of whole degrees per tick.
    pub fn with_random_speed<R: Rng>(track_index: usize, rng: &mut R) -> Self {
        let degrees = rng.gen_range(MIN_SPEED_DEG..MAX_SPEED_DEG);
        Self::new(track_index, f64::from(degrees).to_radians())
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
    }

    /// Put the runner back on the start line.
    pub fn reset(&mut self) {
        self.angle = 0.0;
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }
}
