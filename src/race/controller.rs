//! Race controller - run state, tick logic, and finishing order
//!
//! Owns the runners and the tick schedule. Start and stop are total and
//! idempotent; every tick advances all runners and checks whether the
//! reference runner on track 0 has completed the race.

use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::race::runner::{Runner, NUM_RUNNERS};
use crate::race::ticker::Ticker;

/// Laps the track-0 runner must complete to end the race.
pub const LAPS_TO_FINISH: u32 = 5;

/// Period between position updates.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Angle at which the race ends (five full revolutions).
const FINISH_ANGLE: f64 = TAU * LAPS_TO_FINISH as f64;

/// Outcome of advancing the race by one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Race continues; the surface should repaint.
    Continue,
    /// The reference runner crossed the finish; the race has stopped.
    Finished(Placements),
}

/// Final standings at race end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placements {
    /// Place number per runner index (1 is first). Runners with equal
    /// final angles share a place number.
    places: Vec<u32>,
}

impl Placements {
    /// Rank runners by final angle: a runner's place is one more than the
    /// number of runners strictly ahead of it.
    fn from_runners(runners: &[Runner]) -> Self {
        let places = runners
            .iter()
            .map(|r| {
                1 + runners.iter().filter(|o| o.angle() > r.angle()).count() as u32
            })
            .collect();
        Self { places }
    }

    /// Index of the runner holding `place`, or `None` when ties leave the
    /// place unoccupied.
    pub fn runner_at(&self, place: u32) -> Option<usize> {
        self.places.iter().position(|&p| p == place)
    }

    /// Place number of the runner at `runner_index`.
    pub fn place_of(&self, runner_index: usize) -> u32 {
        self.places[runner_index]
    }

    /// Dialog text naming the runners at places 1 to 3. An unoccupied
    /// place reads `none`.
    pub fn summary(&self) -> String {
        let name = |place| match self.runner_at(place) {
            Some(i) => format!("Runner {}", i + 1),
            None => "none".to_string(),
        };
        format!(
            "Race completed!\nPlaces: 1st: {}, 2nd: {}, 3rd: {}",
            name(1),
            name(2),
            name(3),
        )
    }
}

/// Owns the runners, the run flag, and the lap counter; the only mutators
/// are `start`, `stop`, and the tick itself.
pub struct RaceController {
    runners: Vec<Runner>,
    ticker: Ticker,
    laps_completed: u32,
}

impl RaceController {
    /// Create a controller with one randomly paced runner per track.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let runners = (0..NUM_RUNNERS)
            .map(|i| Runner::with_random_speed(i, rng))
            .collect();
        Self::with_runners(runners)
    }

    /// Create a controller over explicitly paced runners.
    pub fn with_runners(runners: Vec<Runner>) -> Self {
        Self {
            runners,
            ticker: Ticker::new(TICK_PERIOD),
            laps_completed: 0,
        }
    }

    /// Begin a race. No-op while one is already running; otherwise every
    /// runner returns to the start line and the tick schedule is armed.
    pub fn start(&mut self, now: Instant) {
        if self.ticker.is_running() {
            return;
        }
        for runner in &mut self.runners {
            runner.reset();
        }
        self.ticker.start(now);
        log::info!("Race started");
    }

    /// Halt the race. No-op when idle; otherwise the tick schedule is
    /// cancelled and the lap counter cleared. Angles keep their last
    /// value.
    pub fn stop(&mut self) {
        if !self.ticker.is_running() {
            return;
        }
        self.ticker.cancel();
        self.laps_completed = 0;
        log::info!("Race stopped");
    }

    /// Advance every runner one tick, then check the finish condition on
    /// the reference runner.
    pub fn tick(&mut self) -> TickOutcome {
        for runner in &mut self.runners {
            runner.advance();
        }

        if self.runners[0].angle() >= FINISH_ANGLE {
            self.stop();
            let placements = Placements::from_runners(&self.runners);
            log::info!("Race finished: {}", placements.summary().replace('\n', " "));
            return TickOutcome::Finished(placements);
        }
        TickOutcome::Continue
    }

    /// Drain all ticks due at `now`. Returns the placements if the race
    /// finished during this poll; ticks due after the finish are dropped.
    pub fn poll(&mut self, now: Instant) -> Option<Placements> {
        for _ in 0..self.ticker.due_ticks(now) {
            if let TickOutcome::Finished(placements) = self.tick() {
                return Some(placements);
            }
        }
        None
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }

    pub fn laps_completed(&self) -> u32 {
        self.laps_completed
    }
}
