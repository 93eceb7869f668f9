use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    calculator::{CalculationInput, CalculationResult},
    fuel::FuelPriceTable,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_prices_table(prices: &FuelPriceTable) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Fuel", "Price"]);
    for (fuel, price) in prices.iter() {
        table.add_row(vec![
            Cell::new(fuel),
            Cell::new(price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_calculation_table(input: &CalculationInput, result: &CalculationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "ICE", "EV"]);
    table.add_row(vec![
        Cell::new("Purchase").add_attribute(Attribute::Dim),
        Cell::new(input.ice_price).set_alignment(CellAlignment::Right),
        Cell::new(input.ev_price).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Consumption").add_attribute(Attribute::Dim),
        Cell::new(input.ice_consumption).set_alignment(CellAlignment::Right),
        Cell::new(input.ev_consumption).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy").add_attribute(Attribute::Dim),
        Cell::new(format!("{} {}", input.fuel, input.fuel_price))
            .set_alignment(CellAlignment::Right),
        Cell::new(input.electricity_price).set_alignment(CellAlignment::Right),
    ]);
    let (ice_color, ev_color) = if result.ev_cost_per_km < result.ice_cost_per_km {
        (Color::Red, Color::Green)
    } else {
        (Color::Green, Color::Red)
    };
    table.add_row(vec![
        Cell::new("Per km").add_attribute(Attribute::Dim),
        Cell::new(result.ice_cost_per_km).set_alignment(CellAlignment::Right).fg(ice_color),
        Cell::new(result.ev_cost_per_km).set_alignment(CellAlignment::Right).fg(ev_color),
    ]);
    table.add_row(vec![
        Cell::new(format!("Per {}", input.annual_distance)).add_attribute(Attribute::Dim),
        Cell::new(result.ice_cost_per_km * input.annual_distance)
            .set_alignment(CellAlignment::Right),
        Cell::new(result.ev_cost_per_km * input.annual_distance)
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Saving").add_attribute(Attribute::Dim),
        Cell::new(""),
        Cell::new(result.annual_saving).set_alignment(CellAlignment::Right).fg(
            if result.annual_saving.0 > 0.0 { Color::Green } else { Color::Red },
        ),
    ]);
    table
}
