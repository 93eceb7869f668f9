use clap::Parser;
use serde::Serialize;

use crate::{
    api::PriceSource,
    cli::prices::print_banner,
    core::{
        calculator::{self, CalculationInput, CalculationResult, Payback},
        fuel::{Fuel, FuelPriceTable},
        provider::{PriceProvider, PriceSnapshot},
    },
    prelude::*,
    quantity::{
        consumption::{KilowattHoursPer100Km, LitersPer100Km},
        currency::Rubles,
        distance::Kilometers,
        price::{KilowattHourPrice, LiterPrice},
    },
    tables::build_calculation_table,
};

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(long, value_enum, default_value = "ai-92")]
    pub fuel: Fuel,

    /// Fuel price per liter, defaults to the current price of the selected fuel.
    #[clap(long)]
    pub fuel_price: Option<LiterPrice>,

    /// ICE vehicle purchase price.
    #[clap(long, default_value = "2200000")]
    pub ice_price: Rubles,

    /// ICE vehicle fuel consumption, liters per 100 km.
    #[clap(long, default_value = "8.5")]
    pub ice_consumption: LitersPer100Km,

    /// EV purchase price.
    #[clap(long, default_value = "3600000")]
    pub ev_price: Rubles,

    /// EV energy consumption, kilowatt-hours per 100 km.
    #[clap(long, default_value = "18.0")]
    pub ev_consumption: KilowattHoursPer100Km,

    /// Electricity tariff per kilowatt-hour.
    #[clap(long, default_value = "3.85")]
    pub electricity_price: KilowattHourPrice,

    /// Annual distance in kilometers.
    #[clap(
        long,
        default_value = "20000",
        value_parser = clap::value_parser!(u32).range(5_000..=100_000),
    )]
    pub annual_distance: u32,
}

impl CalculateArgs {
    pub fn to_input(&self, prices: &FuelPriceTable) -> CalculationInput {
        CalculationInput::builder()
            .fuel(self.fuel)
            .fuel_price(self.fuel_price.unwrap_or_else(|| prices.get(self.fuel)))
            .ice_price(self.ice_price)
            .ice_consumption(self.ice_consumption)
            .ev_price(self.ev_price)
            .ev_consumption(self.ev_consumption)
            .electricity_price(self.electricity_price)
            .annual_distance(Kilometers::from(self.annual_distance))
            .build()
    }
}

#[derive(Serialize)]
struct Report {
    prices: PriceSnapshot,
    input: CalculationInput,
    result: CalculationResult,
}

#[instrument(skip_all, fields(fuel = %args.fuel))]
pub async fn calculate<S: PriceSource>(
    provider: &mut PriceProvider<S>,
    args: &CalculateArgs,
    json: bool,
) -> Result {
    let prices = provider.get_prices().await;
    let input = args.to_input(&prices.table);
    let result = calculator::calculate(&input);
    info!(annual_saving = ?result.annual_saving, payback = ?result.payback, "calculated");

    if json {
        println!("{}", serde_json::to_string_pretty(&Report { prices, input, result })?);
    } else {
        print_banner(&prices);
        println!("{}", build_calculation_table(&input, &result));
        println!("{}", verdict(&result));
    }
    Ok(())
}

/// Human-readable conclusion.
pub fn verdict(result: &CalculationResult) -> String {
    match result.payback {
        Payback::Years(years) => {
            format!("Payback period: {years}\nAnnual saving: {}", result.annual_saving)
        }
        Payback::Never => "The EV will not pay back with these parameters.".to_owned(),
    }
}
