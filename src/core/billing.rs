use serde::Serialize;

use crate::{
    core::{date::months_between, interval::Interval, plan::PricingPlan, readings::Readings},
    prelude::*,
    quantity::{cost::Cost, units::Units},
};

/// Consumption and costs accumulated over an interval.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
#[must_use]
pub struct Bill {
    pub consumption: Units,
    pub costs: Cost,
}

/// Split the interval at the plan boundaries and charge each segment by its plan.
///
/// The plans must be ordered and contiguous, and each must start on the first of a month.
/// Nothing is checked here: see [`crate::core::validation`].
pub fn allocate(readings: &Readings, plans: &[PricingPlan], interval: Interval) -> Bill {
    let mut bill = Bill::default();
    let mut plans = plans.iter().skip_while(|plan| plan.ends_by(interval.start)).peekable();
    let mut segment = interval;
    while let Some(plan) = plans.next_if(|plan| plan.starts_before(interval.end)) {
        segment = segment
            .with_end(plan.valid_to.map_or(interval.end, |valid_to| valid_to.min(interval.end)));
        let consumption = readings.consumption(segment);
        let n_months = months_between(segment.start, segment.end);
        let costs = consumption * plan.unit_price + plan.base_price * f64::from(n_months);
        debug!(plan = %plan.name, ?segment, ?consumption, n_months, ?costs, "allocated");
        bill += Bill { consumption, costs };
        if let Some(next_plan) = plans.peek() {
            segment = segment.with_start(next_plan.valid_from.unwrap_or(segment.end));
        }
    }
    bill
}
