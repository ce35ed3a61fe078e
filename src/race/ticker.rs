//! Ticker - fixed-period repeating schedule with a cancel handle
//!
//! The ticker never sleeps or spawns anything: it is polled with an
//! externally supplied instant, so the race loop can be driven from the
//! UI's update pass and exercised in tests with synthetic time.

use std::time::{Duration, Instant};

/// A repeating fixed-period deadline. Armed by `start`, disarmed by
/// `cancel`; between the two, `due_ticks` reports how many periods have
/// elapsed.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the ticker; the first tick comes due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the ticker. A later `start` rebases the period, so this is
    /// a full stop rather than a pause.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks that have come due by `now`. The deadline advances
    /// by whole periods, so a slow poll reports every missed tick instead
    /// of losing them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while now >= due {
            due += self.period;
            fired += 1;
        }
        self.next_due = Some(due);
        fired
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(50);

    #[test]
    fn test_idle_ticker_never_fires() {
        let mut ticker = Ticker::new(PERIOD);
        let now = Instant::now();

        assert!(!ticker.is_running());
        assert_eq!(ticker.due_ticks(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);

        assert_eq!(ticker.due_ticks(start), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(49)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(50)), 1);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(50)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(100)), 1);
    }

    #[test]
    fn test_slow_poll_reports_every_missed_tick() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);

        assert_eq!(ticker.due_ticks(start + Duration::from_millis(230)), 4);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(250)), 1);
    }

    #[test]
    fn test_cancel_disarms() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);
        ticker.cancel();

        assert!(!ticker.is_running());
        assert_eq!(ticker.due_ticks(start + Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_restart_rebases_the_period() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);
        ticker.cancel();

        let restart = start + Duration::from_secs(1);
        ticker.start(restart);
        assert_eq!(ticker.due_ticks(restart + Duration::from_millis(49)), 0);
        assert_eq!(ticker.due_ticks(restart + Duration::from_millis(50)), 1);
    }
}
