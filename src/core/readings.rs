use chrono::{Days, NaiveDate};
use itertools::Itertools;

use crate::{
    core::{
        date::whole_days,
        error::{CalculationError, Result},
        interval::Interval,
        reading::MeterReading,
    },
    prelude::*,
    quantity::units::Units,
};

/// Meter readings sorted by date, at most one per day.
///
/// Built once per calculation from the caller's readings, which are left untouched.
#[derive(Clone, Debug)]
#[must_use]
pub struct Readings(Vec<MeterReading>);

impl Readings {
    /// Sort the readings by date and collapse same-day readings, the last supplied one wins.
    pub fn try_new<'a>(readings: impl IntoIterator<Item = &'a MeterReading>) -> Result<Self> {
        let mut sorted = readings.into_iter().copied().collect_vec();
        let n_supplied = sorted.len();
        sorted.sort_by_key(|reading| reading.date);
        let sorted = sorted
            .into_iter()
            .coalesce(|previous, next| {
                if previous.date == next.date { Ok(next) } else { Err((previous, next)) }
            })
            .collect_vec();
        if sorted.len() != n_supplied {
            warn!(n_supplied, n_kept = sorted.len(), "dropped same-day readings");
        }
        if sorted.len() < 2 {
            return Err(CalculationError::InsufficientData { n_readings: sorted.len() });
        }
        Ok(Self(sorted))
    }

    pub fn as_slice(&self) -> &[MeterReading] {
        &self.0
    }

    /// Dates from the first reading up to and including the last one.
    pub fn span(&self) -> Interval {
        let (first, last) = (self.first(), self.last());
        Interval::new(first.date, last.date.checked_add_days(Days::new(1)).unwrap_or(last.date))
    }

    /// Estimate the meter count on the date by linear interpolation between the bracketing
    /// readings.
    ///
    /// Dates before the first reading resolve to the first count,
    /// dates on or after the last reading resolve to the last count.
    #[must_use]
    pub fn interpolate(&self, date: NaiveDate) -> Units {
        let Some(lower) = self.last_at_or_before(date) else {
            return self.first().count;
        };
        let mut upper = self.first_at_or_after(date);
        if std::ptr::eq(upper, lower) {
            upper = lower
                .date
                .checked_add_days(Days::new(1))
                .map_or_else(|| self.last(), |next_day| self.first_at_or_after(next_day));
        }
        if date >= upper.date {
            return upper.count;
        }
        #[expect(clippy::cast_precision_loss)]
        let slope = (upper.count - lower.count) / whole_days(lower.date, upper.date) as f64;
        #[expect(clippy::cast_precision_loss)]
        let offset = whole_days(lower.date, date) as f64;
        lower.count + slope * offset
    }

    /// Units consumed within the interval.
    ///
    /// Negative when the counts decrease, which is not guarded against.
    #[must_use]
    pub fn consumption(&self, interval: Interval) -> Units {
        self.interpolate(interval.end) - self.interpolate(interval.start)
    }

    /// The reading with the greatest date not after `date`.
    fn last_at_or_before(&self, date: NaiveDate) -> Option<&MeterReading> {
        let index = self.0.partition_point(|reading| reading.date <= date);
        index.checked_sub(1).map(|index| &self.0[index])
    }

    /// The reading with the smallest date not before `date`, or the last one if none.
    fn first_at_or_after(&self, date: NaiveDate) -> &MeterReading {
        let index = self.0.partition_point(|reading| reading.date < date);
        self.0.get(index).unwrap_or_else(|| self.last())
    }

    fn first(&self) -> &MeterReading {
        &self.0[0]
    }

    fn last(&self) -> &MeterReading {
        &self.0[self.0.len() - 1]
    }
}

impl<'a> TryFrom<&'a [MeterReading]> for Readings {
    type Error = CalculationError;

    fn try_from(readings: &'a [MeterReading]) -> Result<Self> {
        Self::try_new(readings)
    }
}
