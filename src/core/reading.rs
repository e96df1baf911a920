use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quantity::units::Units;

/// Cumulative meter count as read on a specific day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, derive_more::Constructor)]
#[must_use]
pub struct MeterReading {
    pub date: NaiveDate,
    pub count: Units,
}
