use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, price::UnitPrice};

/// Contract rate: a flat monthly base price plus a price per consumed unit.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, bon::Builder)]
#[must_use]
pub struct PricingPlan {
    #[builder(into)]
    pub name: String,

    /// Charged once for every calendar month the plan is billed in.
    pub base_price: Cost,

    pub unit_price: UnitPrice,

    /// Inclusive, `None` means «since always».
    pub valid_from: Option<NaiveDate>,

    /// Exclusive, `None` means «forever».
    pub valid_to: Option<NaiveDate>,
}

impl PricingPlan {
    /// Whether the plan no longer applies on `date`.
    #[must_use]
    pub fn ends_by(&self, date: NaiveDate) -> bool {
        self.valid_to.is_some_and(|valid_to| valid_to <= date)
    }

    /// Whether the plan already applies at some point before `date`.
    #[must_use]
    pub fn starts_before(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|valid_from| valid_from < date)
    }
}
