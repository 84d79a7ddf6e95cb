//! Clock abstraction.
//!
//! All date math in the tracker is relative to the clock's notion of
//! "today" in local time. Injecting the clock keeps streak and schedule
//! computations deterministic under test.

use chrono::NaiveDate;

/// Supplies the current calendar date.
pub trait Clock {
    /// Today's date in the local timezone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation backed by `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replaying history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_clock_is_usable_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        // Smoke check only; the actual value depends on the wall clock.
        let _ = clock.today();
    }
}
