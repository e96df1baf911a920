use std::ops::Mul;

use crate::quantity::{cost::Cost, price::UnitPrice};

quantity!(
    /// Meter units: whatever the meter counts (kWh, m³, …).
    Units,
    suffix: "u"
);

impl Mul<UnitPrice> for Units {
    type Output = Cost;

    fn mul(self, rhs: UnitPrice) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}
