use serde::{Deserialize, Serialize};

use crate::{
    core::{
        billing::Bill,
        error::Result,
        interval::Interval,
        plan::PricingPlan,
        reading::MeterReading,
        readings::Readings,
        statistics::MonthlyStatistics,
        validation::{Violation, validate_coverage, validate_plans},
    },
    quantity::units::Units,
};

/// Meter readings together with the pricing plans they are billed by.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Series {
    pub name: String,

    /// Unit the meter counts in, for display only.
    #[serde(default)]
    pub unit: Option<String>,

    /// Currency of the plan prices, for display only.
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub plans: Vec<PricingPlan>,

    #[serde(default)]
    pub readings: Vec<MeterReading>,
}

impl Series {
    /// The readings sorted by date, for repeated calculations.
    pub fn sorted_readings(&self) -> Result<Readings> {
        Readings::try_new(&self.readings)
    }

    pub fn consumption(&self, interval: Interval) -> Result<Units> {
        crate::core::consumption(&self.readings, interval)
    }

    pub fn costs(&self, interval: Interval) -> Result<Bill> {
        crate::core::costs(&self.readings, &self.plans, interval)
    }

    pub fn monthly_statistics(&self, interval: Interval) -> Result<MonthlyStatistics> {
        crate::core::monthly_statistics(&self.readings, &self.plans, interval)
    }

    /// All the plan defects, including the parts of the interval no plan covers.
    #[must_use]
    pub fn validate(&self, interval: Interval) -> Vec<Violation> {
        [validate_plans(&self.plans), validate_coverage(&self.plans, interval)]
            .into_iter()
            .filter_map(Result::err)
            .flatten()
            .collect()
    }
}
