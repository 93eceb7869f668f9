use std::ops::Mul;

use crate::quantity::{
    consumption::{KilowattHoursPer100Km, LitersPer100Km},
    currency::Rubles,
    distance::Kilometers,
};

quantity!(
    /// Fuel price per liter.
    LiterPrice, suffix: "₽/l", precision: 2
);

quantity!(
    /// Energy tariff.
    KilowattHourPrice, suffix: "₽/kWh", precision: 2
);

quantity!(
    /// Running cost of one kilometer.
    KilometerCost, suffix: "₽/km", precision: 3
);

impl Mul<LiterPrice> for LitersPer100Km {
    type Output = KilometerCost;

    fn mul(self, price: LiterPrice) -> Self::Output {
        KilometerCost((self.0 / 100.0) * price.0)
    }
}

impl Mul<KilowattHourPrice> for KilowattHoursPer100Km {
    type Output = KilometerCost;

    fn mul(self, price: KilowattHourPrice) -> Self::Output {
        KilometerCost((self.0 / 100.0) * price.0)
    }
}

implement_mul!(KilometerCost, Kilometers, Rubles);
