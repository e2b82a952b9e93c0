// * Passive interval timer.
// * Nothing fires by itself: callers poll check_time() or await wait().

use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Clone, Copy)]
pub struct PassiveTimer {
    // * None means "wait up": the timer never fires
    interval: Option<Duration>,
    started: Instant,
}

impl PassiveTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: Some(interval),
            started: Instant::now(),
        }
    }

    pub fn wait_up() -> Self {
        Self {
            interval: None,
            started: Instant::now(),
        }
    }

    // * Sets a new interval and restarts the timer
    pub fn set_timing(&mut self, interval: Duration) -> Duration {
        self.interval = Some(interval);
        self.reset();
        interval
    }

    pub fn reset(&mut self) {
        self.started = Instant::now();
    }

    /// Interval the timer was set to; zero for a wait-up timer.
    pub fn interval(&self) -> Duration {
        self.interval.unwrap_or(Duration::ZERO)
    }

    pub fn is_wait_up(&self) -> bool {
        self.interval.is_none()
    }

    // * Time elapsed since the last reset
    pub fn current(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn check_time(&self) -> bool {
        match self.interval {
            Some(interval) => self.current() >= interval,
            None => false,
        }
    }

    pub fn remaining(&self) -> Duration {
        match self.interval {
            Some(interval) => interval.saturating_sub(self.current()),
            None => Duration::MAX,
        }
    }

    /// Sleeps until the interval elapses. Returns `false` immediately for a
    /// wait-up timer instead of blocking forever.
    pub async fn wait(&self) -> bool {
        if self.is_wait_up() {
            return false;
        }

        let left = self.remaining();
        if !left.is_zero() {
            sleep(left).await;
        }
        true
    }
}

impl Default for PassiveTimer {
    fn default() -> Self {
        Self::wait_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_fires_immediately() {
        let timer = PassiveTimer::new(Duration::ZERO);
        assert!(timer.check_time());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_wait_up_never_fires() {
        let timer = PassiveTimer::default();
        assert!(timer.is_wait_up());
        assert!(!timer.check_time());
        assert_eq!(timer.interval(), Duration::ZERO);
    }

    #[test]
    fn test_set_timing() {
        let mut timer = PassiveTimer::wait_up();
        let set = timer.set_timing(Duration::from_secs(3600));
        assert_eq!(set, Duration::from_secs(3600));
        assert!(!timer.is_wait_up());
        assert!(!timer.check_time());
    }

    #[tokio::test]
    async fn test_wait_elapses_interval() {
        let timer = PassiveTimer::new(Duration::from_millis(20));
        assert!(timer.wait().await);
        assert!(timer.check_time());
        assert!(timer.current() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_wait_up_returns_immediately() {
        let timer = PassiveTimer::wait_up();
        assert!(!timer.wait().await);
    }
}
