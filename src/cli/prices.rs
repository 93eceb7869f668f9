use chrono::{Local, NaiveDate};

use crate::{
    api::PriceSource,
    core::provider::{PriceProvider, PriceSnapshot},
    prelude::*,
    tables::build_prices_table,
};

#[instrument(skip_all)]
pub async fn prices<S: PriceSource>(provider: &mut PriceProvider<S>, json: bool) -> Result {
    let prices = provider.get_prices().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&prices)?);
    } else {
        print_banner(&prices);
        println!("{}", build_prices_table(&prices.table));
    }
    Ok(())
}

pub fn print_banner(prices: &PriceSnapshot) {
    println!("{}", banner(prices, Local::now().date_naive()));
}

/// The date is today's rather than the fetch date, the snapshot may come from the cache.
fn banner(prices: &PriceSnapshot, today: NaiveDate) -> String {
    if prices.is_live {
        format!("✅ Fuel prices updated automatically ({today})")
    } else {
        "⚠️ Could not reach the price server, using archived prices.".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::core::fuel::FuelPriceTable;

    #[test]
    fn test_banner() -> Result {
        let fetched_at = Local
            .with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
            .single()
            .context("ambiguous time")?;
        let mut prices = PriceSnapshot { table: FuelPriceTable::DEFAULT, is_live: true, fetched_at };
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).context("invalid date")?;
        assert_eq!(banner(&prices, today), "✅ Fuel prices updated automatically (2026-10-19)");
        prices.is_live = false;
        assert!(banner(&prices, today).starts_with("⚠️"));
        Ok(())
    }
}
