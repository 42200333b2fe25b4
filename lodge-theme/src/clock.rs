//! Sources of "the current month".
//!
//! Resolvers never read the clock themselves; callers pick a source.
use crate::month::Month;

/// Supplies the month a page is being rendered in.
pub trait MonthSource {
    fn current_month(&self) -> Month;
}

/// A month pinned by the caller. Used for previews and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMonth(pub Month);

impl MonthSource for FixedMonth {
    fn current_month(&self) -> Month {
        self.0
    }
}

/// Local wall-clock month.
#[cfg(feature = "clock")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "clock")]
impl MonthSource for SystemClock {
    fn current_month(&self) -> Month {
        use chrono::Datelike;
        let now = chrono::Local::now();
        // chrono guarantees 1..=12
        Month::try_from(now.month()).unwrap_or(Month::JANUARY)
    }
}
