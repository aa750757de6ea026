//! Time source abstraction
//!
//! Everything that stamps a record or anchors the schedule window asks a
//! [`Clock`] instead of calling `Utc::now()` directly, so tests can pin time.

use std::cell::Cell;

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Supplies the current instant and the current local calendar day
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day, truncated to midnight
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that starts at a fixed instant and advances by `step` on every read.
///
/// A zero step gives a frozen clock. Unlike [`SystemClock`], `today` is the
/// UTC date of the current instant, so a pinned instant names the same day
/// on every host regardless of its time zone.
#[derive(Debug)]
pub struct SteppingClock {
    current: Cell<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }

    pub fn frozen(at: DateTime<Utc>) -> Self {
        Self::new(at, Duration::zero())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }

    /// UTC calendar day; does not advance the clock
    fn today(&self) -> NaiveDate {
        self.current.get().date_naive()
    }
}
