use std::fmt::{Debug, Formatter};

use chrono::{Months, NaiveDate};

use crate::core::date::whole_days;

#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: NaiveDate,

    /// Exclusive.
    pub end: NaiveDate,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Interval {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `n_months` calendar months preceding `end`, counted from the same day of month.
    pub fn months_until(end: NaiveDate, n_months: u32) -> Option<Self> {
        Some(Self::new(end.checked_sub_months(Months::new(n_months))?, end))
    }

    pub const fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    pub const fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    #[must_use]
    pub fn n_days(self) -> i64 {
        whole_days(self.start, self.end)
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start <= date) && (date < self.end)
    }
}
