use chrono::{Local, NaiveDate};
use std::time::Instant;

/// Source of time for the registry.
///
/// Runs are measured on the monotonic clock so that wall-clock jumps during a
/// run do not distort accumulated time. Calendar dates (used for the
/// today/previous split) still come from the local wall clock.
pub trait Clock {
    /// Monotonic instant used to mark the start of a run
    fn now(&self) -> Instant;

    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Seconds elapsed since `start`, never negative
pub fn elapsed_since(clock: &dyn Clock, start: Instant) -> f64 {
    clock.now().saturating_duration_since(start).as_secs_f64()
}

/// Fold a finished run into an accumulated total
pub fn accumulate(accumulated: f64, clock: &dyn Clock, since: Instant) -> f64 {
    accumulated + elapsed_since(clock, since)
}

#[cfg(test)]
pub mod testing {
    use super::Clock;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    /// Clock that only moves when told to. Clones share the same state, so a
    /// test can keep a handle after handing one to the registry.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        origin: Instant,
        offset: Rc<Cell<Duration>>,
        today: Rc<Cell<NaiveDate>>,
    }

    impl ManualClock {
        pub fn new(today: NaiveDate) -> Self {
            Self {
                origin: Instant::now(),
                offset: Rc::new(Cell::new(Duration::ZERO)),
                today: Rc::new(Cell::new(today)),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }

        pub fn advance_secs(&self, secs: u64) {
            self.advance(Duration::from_secs(secs));
        }

        pub fn set_today(&self, date: NaiveDate) {
            self.today.set(date);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + self.offset.get()
        }

        fn today(&self) -> NaiveDate {
            self.today.get()
        }
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }
}
