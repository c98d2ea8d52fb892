use std::time::{Duration, Instant};

/// A cancellable repeating deadline.
///
/// The ticker doesn't run anything itself; the event loop asks it how long to
/// wait for input and whether a tick is due.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    /// When the next tick is due; `None` if the ticker is stopped
    deadline: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker that, once started, fires every `period`
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            deadline: None,
        }
    }

    /// (Re)start the ticker so that it next fires one period after `now`
    pub(crate) fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Return how long to wait from `now` until the next tick is due, or
    /// `None` if the ticker is stopped
    pub(crate) fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// If a tick is due at `now`, schedule the following one and return
    /// `true`.
    ///
    /// Ticks are scheduled a fixed period apart.  If the caller has fallen a
    /// whole period or more behind, missed ticks are skipped rather than
    /// delivered in a burst.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let next = deadline + self.period;
        self.deadline = Some(if next <= now { now + self.period } else { next });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stopped_ticker() {
        let now = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        assert!(!ticker.is_active());
        assert_eq!(ticker.timeout(now), None);
        assert!(!ticker.fire(now + ms(10_000)));
    }

    #[test]
    fn fires_every_period() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);
        assert!(ticker.is_active());
        assert_eq!(ticker.timeout(t0), Some(PERIOD));
        assert_eq!(ticker.timeout(t0 + ms(200)), Some(ms(300)));
        assert!(!ticker.fire(t0 + ms(499)));
        assert!(ticker.fire(t0 + ms(500)));
        assert!(!ticker.fire(t0 + ms(500)));
        assert_eq!(ticker.timeout(t0 + ms(520)), Some(ms(480)));
        assert!(ticker.fire(t0 + ms(1010)));
        assert_eq!(ticker.timeout(t0 + ms(1010)), Some(ms(490)));
    }

    #[test]
    fn overdue_timeout_is_zero() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);
        assert_eq!(ticker.timeout(t0 + ms(900)), Some(Duration::ZERO));
    }

    #[test]
    fn skips_missed_ticks() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);
        assert!(ticker.fire(t0 + ms(1700)));
        assert!(!ticker.fire(t0 + ms(1700)));
        assert_eq!(ticker.timeout(t0 + ms(1700)), Some(PERIOD));
    }

    #[test]
    fn cancel() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);
        ticker.cancel();
        assert!(!ticker.is_active());
        assert!(!ticker.fire(t0 + ms(600)));
        ticker.start(t0 + ms(600));
        assert!(!ticker.fire(t0 + ms(1000)));
        assert!(ticker.fire(t0 + ms(1100)));
    }
}
