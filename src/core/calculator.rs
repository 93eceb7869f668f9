use bon::Builder;
use serde::Serialize;

use crate::{
    core::fuel::Fuel,
    quantity::{
        consumption::{KilowattHoursPer100Km, LitersPer100Km},
        currency::Rubles,
        distance::Kilometers,
        price::{KilometerCost, KilowattHourPrice, LiterPrice},
        time::Years,
    },
};

/// Everything needed to compare an ICE vehicle against an EV.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Builder, Serialize)]
pub struct CalculationInput {
    pub fuel: Fuel,
    pub fuel_price: LiterPrice,
    pub ice_price: Rubles,
    pub ice_consumption: LitersPer100Km,
    pub ev_price: Rubles,
    pub ev_consumption: KilowattHoursPer100Km,
    pub electricity_price: KilowattHourPrice,
    pub annual_distance: Kilometers,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// Years until the running-cost savings cover the price difference.
    ///
    /// Negative when the EV is also cheaper to buy.
    Years(Years),

    /// The EV is not cheaper to run, so it never pays back.
    Never,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub ice_cost_per_km: KilometerCost,
    pub ev_cost_per_km: KilometerCost,

    /// Negative when the EV is more expensive to run.
    pub annual_saving: Rubles,

    /// How much more the EV costs to buy.
    pub price_delta: Rubles,

    pub payback: Payback,
}

/// Calculate the EV payback period.
///
/// Nothing is rounded here, that is up to the presentation.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let ice_cost_per_km = input.ice_consumption * input.fuel_price;
    let ev_cost_per_km = input.ev_consumption * input.electricity_price;
    let annual_saving = (ice_cost_per_km - ev_cost_per_km) * input.annual_distance;
    let price_delta = input.ev_price - input.ice_price;
    // Compare the raw value: the total order of the quantities puts NaN above zero.
    let payback = if annual_saving.0 > 0.0 {
        Payback::Years(Years(price_delta / annual_saving))
    } else {
        Payback::Never
    };
    CalculationResult { ice_cost_per_km, ev_cost_per_km, annual_saving, price_delta, payback }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    fn input() -> CalculationInput {
        CalculationInput::builder()
            .fuel(Fuel::Ai92)
            .fuel_price(LiterPrice(65.80))
            .ice_price(Rubles(2_200_000.0))
            .ice_consumption(LitersPer100Km(8.5))
            .ev_price(Rubles(3_600_000.0))
            .ev_consumption(KilowattHoursPer100Km(18.0))
            .electricity_price(KilowattHourPrice(3.85))
            .annual_distance(Kilometers(20_000.0))
            .build()
    }

    #[test]
    fn test_reference_example() {
        let result = calculate(&input());
        assert_abs_diff_eq!(result.ice_cost_per_km.0, 5.593, epsilon = 1e-9);
        assert_abs_diff_eq!(result.ev_cost_per_km.0, 0.693, epsilon = 1e-9);
        assert_abs_diff_eq!(result.annual_saving.0, 98_000.0, epsilon = 1e-6);
        assert_eq!(result.price_delta, Rubles(1_400_000.0));
        let Payback::Years(years) = result.payback else {
            panic!("expected a payback period, got {:?}", result.payback);
        };
        assert_abs_diff_eq!(years.0, 14.285_714, epsilon = 1e-6);
        assert_eq!(years.to_string(), "14.3 years");
    }

    #[test]
    fn test_nan_price_never_pays_back() -> Result {
        let result = calculate(&CalculationInput { fuel_price: "NaN".parse()?, ..input() });
        assert!(result.annual_saving.0.is_nan());
        assert_eq!(result.payback, Payback::Never);
        Ok(())
    }

    #[test]
    fn test_idempotent() {
        let input = input();
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_equal_prices_pay_back_immediately() {
        let result = calculate(&input().with_ev_price(Rubles(2_200_000.0)));
        assert_eq!(result.payback, Payback::Years(Years(0.0)));
    }

    #[test]
    fn test_cheaper_ev_has_negative_payback() {
        let result = calculate(&input().with_ev_price(Rubles(2_004_000.0)));
        let Payback::Years(years) = result.payback else {
            panic!("expected a payback period, got {:?}", result.payback);
        };
        assert_abs_diff_eq!(years.0, -2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_saving_never_pays_back() {
        let input = CalculationInput {
            fuel_price: LiterPrice(10.0),
            ice_consumption: LitersPer100Km(10.0),
            electricity_price: KilowattHourPrice(5.0),
            ev_consumption: KilowattHoursPer100Km(20.0),
            ..input()
        };
        let result = calculate(&input);
        assert_eq!(result.annual_saving, Rubles::ZERO);
        assert_eq!(result.payback, Payback::Never);
    }

    #[test]
    fn test_negative_saving_never_pays_back() {
        for ev_price in [Rubles(1_000_000.0), Rubles(5_000_000.0)] {
            let input = CalculationInput {
                electricity_price: KilowattHourPrice(50.0),
                ..input().with_ev_price(ev_price)
            };
            let result = calculate(&input);
            assert!(result.annual_saving < Rubles::ZERO);
            assert_eq!(result.payback, Payback::Never);
        }
    }

    impl CalculationInput {
        const fn with_ev_price(mut self, ev_price: Rubles) -> Self {
            self.ev_price = ev_price;
            self
        }
    }
}
