use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::core::{interval::Interval, plan::PricingPlan};

/// Defect in a pricing plan sequence that makes the billing numerically wrong.
///
/// Plans are referred to by their position in the sequence.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Violation {
    #[display("plan #{index} starts on {valid_from}, not on the first day of a month")]
    MisalignedStart { index: usize, valid_from: NaiveDate },

    #[display("plan #{index} has no start date, but only the first plan may be open-ended")]
    OpenStart { index: usize },

    #[display("plan #{index} has no end date, but only the last plan may be open-ended")]
    OpenEnd { index: usize },

    #[display("plan #{index} ends on {valid_to}, before it starts on {valid_from}")]
    EmptyValidity { index: usize, valid_from: NaiveDate, valid_to: NaiveDate },

    #[display(
        "no plan is valid from {from} to {to}, between plans #{index} and #{next}",
        next = index + 1
    )]
    Gap { index: usize, from: NaiveDate, to: NaiveDate },

    #[display("plans #{index} and #{next} overlap from {from} to {to}", next = index + 1)]
    Overlap { index: usize, from: NaiveDate, to: NaiveDate },

    #[display("no plan is valid from {from} to {to}")]
    Uncovered { from: NaiveDate, to: NaiveDate },
}

/// Check that the plans form one contiguous sequence of month-aligned validity intervals.
pub fn validate_plans(plans: &[PricingPlan]) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();
    let last_index = plans.len().saturating_sub(1);

    for (index, plan) in plans.iter().enumerate() {
        match plan.valid_from {
            Some(valid_from) if valid_from.day() != 1 => {
                violations.push(Violation::MisalignedStart { index, valid_from });
            }
            None if index != 0 => violations.push(Violation::OpenStart { index }),
            _ => {}
        }
        if plan.valid_to.is_none() && index != last_index {
            violations.push(Violation::OpenEnd { index });
        }
        if let (Some(valid_from), Some(valid_to)) = (plan.valid_from, plan.valid_to)
            && valid_to <= valid_from
        {
            violations.push(Violation::EmptyValidity { index, valid_from, valid_to });
        }
    }

    for (index, (current, next)) in plans.iter().tuple_windows().enumerate() {
        let (Some(valid_to), Some(next_from)) = (current.valid_to, next.valid_from) else {
            continue;
        };
        if next_from > valid_to {
            violations.push(Violation::Gap { index, from: valid_to, to: next_from });
        } else if next_from < valid_to {
            violations.push(Violation::Overlap { index, from: next_from, to: valid_to });
        }
    }

    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

/// Check that the plans cover the entire interval.
///
/// Only the outer bounds are inspected, gaps between the plans are [`validate_plans`]' job.
pub fn validate_coverage(plans: &[PricingPlan], interval: Interval) -> Result<(), Vec<Violation>> {
    let (Some(first), Some(last)) = (plans.first(), plans.last()) else {
        return Err(vec![Violation::Uncovered { from: interval.start, to: interval.end }]);
    };
    let mut violations = Vec::new();
    if let Some(valid_from) = first.valid_from
        && valid_from > interval.start
    {
        violations.push(Violation::Uncovered {
            from: interval.start,
            to: valid_from.min(interval.end),
        });
    }
    if let Some(valid_to) = last.valid_to
        && valid_to < interval.end
    {
        violations.push(Violation::Uncovered {
            from: valid_to.max(interval.start),
            to: interval.end,
        });
    }
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::date::ymd,
        quantity::{cost::Cost, price::UnitPrice},
    };

    fn plan(valid_from: Option<NaiveDate>, valid_to: Option<NaiveDate>) -> PricingPlan {
        PricingPlan::builder()
            .name("plan")
            .base_price(Cost(10.0))
            .unit_price(UnitPrice(0.25))
            .maybe_valid_from(valid_from)
            .maybe_valid_to(valid_to)
            .build()
    }

    #[test]
    fn test_well_formed() {
        let plans = [
            plan(None, Some(ymd(2019, 1, 1))),
            plan(Some(ymd(2019, 1, 1)), Some(ymd(2019, 8, 1))),
            plan(Some(ymd(2019, 8, 1)), None),
        ];
        assert_eq!(validate_plans(&plans), Ok(()));
        assert_eq!(validate_plans(&[]), Ok(()));
    }

    #[test]
    fn test_gap_and_overlap() {
        let plans = [
            plan(Some(ymd(2019, 1, 1)), Some(ymd(2019, 7, 31))),
            plan(Some(ymd(2019, 8, 1)), Some(ymd(2019, 10, 1))),
            plan(Some(ymd(2019, 9, 1)), None),
        ];
        assert_eq!(
            validate_plans(&plans),
            Err(vec![
                Violation::Gap { index: 0, from: ymd(2019, 7, 31), to: ymd(2019, 8, 1) },
                Violation::Overlap { index: 1, from: ymd(2019, 9, 1), to: ymd(2019, 10, 1) },
            ])
        );
    }

    #[test]
    fn test_misaligned_and_open() {
        let plans = [
            plan(Some(ymd(2019, 1, 15)), None),
            plan(None, Some(ymd(2019, 6, 1))),
        ];
        assert_eq!(
            validate_plans(&plans),
            Err(vec![
                Violation::MisalignedStart { index: 0, valid_from: ymd(2019, 1, 15) },
                Violation::OpenEnd { index: 0 },
                Violation::OpenStart { index: 1 },
            ])
        );
    }

    #[test]
    fn test_empty_validity() {
        let plans = [plan(Some(ymd(2019, 6, 1)), Some(ymd(2019, 6, 1)))];
        assert_eq!(
            validate_plans(&plans),
            Err(vec![Violation::EmptyValidity {
                index: 0,
                valid_from: ymd(2019, 6, 1),
                valid_to: ymd(2019, 6, 1),
            }])
        );
    }

    #[test]
    fn test_coverage() {
        let interval = Interval::new(ymd(2019, 1, 15), ymd(2019, 12, 15));
        let plans = [
            plan(Some(ymd(2019, 2, 1)), Some(ymd(2019, 6, 1))),
            plan(Some(ymd(2019, 6, 1)), Some(ymd(2019, 12, 1))),
        ];
        assert_eq!(
            validate_coverage(&plans, interval),
            Err(vec![
                Violation::Uncovered { from: ymd(2019, 1, 15), to: ymd(2019, 2, 1) },
                Violation::Uncovered { from: ymd(2019, 12, 1), to: ymd(2019, 12, 15) },
            ])
        );
        assert_eq!(validate_coverage(&[plan(None, None)], interval), Ok(()));
        assert_eq!(
            validate_coverage(&[], interval),
            Err(vec![Violation::Uncovered { from: interval.start, to: interval.end }])
        );
    }

    #[test]
    fn test_display() {
        let violation = Violation::Gap { index: 0, from: ymd(2019, 7, 31), to: ymd(2019, 8, 1) };
        assert_eq!(
            violation.to_string(),
            "no plan is valid from 2019-07-31 to 2019-08-01, between plans #0 and #1"
        );
    }
}
