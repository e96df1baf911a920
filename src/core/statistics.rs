use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    core::{
        billing::{Bill, allocate},
        date::first_of_next_month,
        error::{CalculationError, Result},
        interval::Interval,
        plan::PricingPlan,
        readings::Readings,
    },
    prelude::*,
    quantity::{cost::Cost, units::Units},
};

/// Consumption and costs of a single period.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Statistics {
    pub valid_from: NaiveDate,

    /// Exclusive.
    pub valid_to: NaiveDate,

    pub consumption: Units,
    pub costs: Cost,
}

impl Statistics {
    pub const fn new(interval: Interval, bill: Bill) -> Self {
        Self {
            valid_from: interval.start,
            valid_to: interval.end,
            consumption: bill.consumption,
            costs: bill.costs,
        }
    }

    pub const fn interval(&self) -> Interval {
        Interval::new(self.valid_from, self.valid_to)
    }

    pub const fn bill(&self) -> Bill {
        Bill { consumption: self.consumption, costs: self.costs }
    }
}

/// Statistics per calendar month, earliest first.
#[derive(Clone, Debug, Default, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[serde(transparent)]
#[must_use]
pub struct MonthlyStatistics(#[into_iterator(owned, ref)] Vec<Statistics>);

impl MonthlyStatistics {
    pub fn total(&self) -> Bill {
        self.0.iter().map(Statistics::bill).sum()
    }
}

/// Bucket the interval into calendar months and bill each of them separately.
///
/// The first and the last buckets may be partial months.
#[instrument(skip_all, fields(interval = ?interval))]
pub fn monthly_statistics(
    readings: &Readings,
    plans: &[PricingPlan],
    interval: Interval,
) -> Result<MonthlyStatistics> {
    let mut statistics = Vec::new();
    let mut cursor = interval.start;
    while cursor < interval.end {
        let next_month =
            first_of_next_month(cursor).ok_or(CalculationError::DateOutOfRange { date: cursor })?;
        let bucket = Interval::new(cursor, next_month.min(interval.end));
        statistics.push(Statistics::new(bucket, allocate(readings, plans, bucket)));
        cursor = bucket.end;
    }
    debug!(n_buckets = statistics.len(), "bucketed");
    Ok(MonthlyStatistics(statistics))
}
