//! Fixed-interval gate between host polls and simulation steps.
use std::time::Duration;

/// Decides whether enough simulated time has passed for the next step.
///
/// The scheduler only compares timestamps; it never sleeps. Hosts poll it as
/// often as they like and the simulation still advances at a constant rate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickScheduler {
    interval: Duration,
    last_step: Option<Duration>,
}

impl TickScheduler {
    /// A scheduler whose reference point is `start`.
    #[must_use]
    pub fn new(interval: Duration, start: Duration) -> Self {
        Self {
            interval,
            last_step: Some(start),
        }
    }

    /// Returns true if a step is due at `now`, moving the reference point to
    /// `now` when it is. An unprimed scheduler only records `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.last_step {
            Some(last) if now.saturating_sub(last) >= self.interval => {
                self.last_step = Some(now);
                true
            }
            Some(_) => false,
            None => {
                self.last_step = Some(now);
                false
            }
        }
    }

    /// Restarts the interval from `now`.
    pub fn reset_at(&mut self, now: Duration) {
        self.last_step = Some(now);
    }

    /// Forgets the reference point; the next poll primes it.
    pub fn clear(&mut self) {
        self.last_step = None;
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn last_step(&self) -> Option<Duration> {
        self.last_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut scheduler = TickScheduler::new(ms(100), Duration::ZERO);
        assert!(!scheduler.poll(ms(16)));
        assert!(!scheduler.poll(ms(99)));
        assert!(scheduler.poll(ms(100)));
        assert_eq!(scheduler.last_step(), Some(ms(100)));
        assert!(!scheduler.poll(ms(150)));
        assert!(scheduler.poll(ms(230)));
        assert!(!scheduler.poll(ms(329)));
    }

    #[test]
    fn test_unprimed_scheduler_waits_a_full_interval() {
        let mut scheduler = TickScheduler::new(ms(100), Duration::ZERO);
        scheduler.clear();
        assert!(!scheduler.poll(ms(5_000)));
        assert!(!scheduler.poll(ms(5_050)));
        assert!(scheduler.poll(ms(5_100)));
    }

    #[test]
    fn test_clock_going_backwards_is_not_due() {
        let mut scheduler = TickScheduler::new(ms(100), ms(500));
        assert!(!scheduler.poll(ms(10)));
        scheduler.reset_at(ms(10));
        assert!(scheduler.poll(ms(110)));
    }
}
