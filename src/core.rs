//! Consumption interpolation and billing allocation.
//!
//! Every entry point sorts the caller's readings into [`Readings`] once and leaves the
//! caller's slice untouched.

pub mod billing;
pub mod date;
pub mod error;
pub mod interval;
pub mod plan;
pub mod reading;
pub mod readings;
pub mod series;
pub mod statistics;
pub mod validation;

pub use self::{
    billing::Bill,
    error::CalculationError,
    interval::Interval,
    plan::PricingPlan,
    reading::MeterReading,
    readings::Readings,
    series::Series,
    statistics::{MonthlyStatistics, Statistics},
    validation::Violation,
};
use crate::{core::error::Result, quantity::units::Units};

/// Units consumed within the interval.
pub fn consumption(readings: &[MeterReading], interval: Interval) -> Result<Units> {
    Ok(Readings::try_new(readings)?.consumption(interval))
}

/// Consumption and costs within the interval, billed by the plans.
pub fn costs(readings: &[MeterReading], plans: &[PricingPlan], interval: Interval) -> Result<Bill> {
    Ok(billing::allocate(&Readings::try_new(readings)?, plans, interval))
}

/// Consumption and costs within the interval, per calendar month.
pub fn monthly_statistics(
    readings: &[MeterReading],
    plans: &[PricingPlan],
    interval: Interval,
) -> Result<MonthlyStatistics> {
    statistics::monthly_statistics(&Readings::try_new(readings)?, plans, interval)
}
