//! Best-effort scan of a fuel price page.
//!
//! The page is expected to contain table rows with the fuel name in the first cell
//! and its price, using a decimal comma, in the second one. Nothing else about the layout is assumed.

use scraper::{ElementRef, Html, Selector};

use crate::{
    core::fuel::{Fuel, FuelPriceTable},
    prelude::*,
    quantity::price::LiterPrice,
};

/// What to do with a matched row whose price cannot be parsed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Abort the whole scan, discarding the prices matched so far.
    #[default]
    Strict,

    /// Log and skip the row, keeping everything matched before and after it.
    SkipMalformed,
}

/// Overwrite the `table` entries with the prices found in the `html` page.
///
/// Rows that mention no known fuel are ignored, and so are their prices.
/// A row mentioning several fuels updates all of them.
#[instrument(skip_all, fields(policy = ?policy))]
pub fn scan(html: &str, mut table: FuelPriceTable, policy: ScanPolicy) -> Result<FuelPriceTable> {
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;
    let document = Html::parse_document(html);

    let mut n_matched = 0_usize;
    for row in document.select(&row_selector) {
        let Some((label, price)) = label_and_price(row, &cell_selector) else {
            continue;
        };
        for fuel in Fuel::all().filter(|fuel| fuel.matches(&label)) {
            match parse_price(&price) {
                Ok(price) => {
                    debug!(%fuel, %label, %price, "matched");
                    table.set(fuel, price);
                    n_matched += 1;
                }
                Err(error) if policy == ScanPolicy::SkipMalformed => {
                    warn!(%fuel, %label, "skipping the row: {error:#}");
                }
                Err(error) => {
                    return Err(error.context(format!("malformed `{fuel}` row: `{label}`")));
                }
            }
        }
    }

    info!(n_matched, "scanned");
    Ok(table)
}

fn selector(selectors: &'static str) -> Result<Selector> {
    Selector::parse(selectors).map_err(|error| anyhow!("invalid selector `{selectors}`: {error}"))
}

/// Extract the trimmed texts of the first two cells, if the row has at least two cells.
fn label_and_price(row: ElementRef<'_>, cell_selector: &Selector) -> Option<(String, String)> {
    let mut cells = row.select(cell_selector).map(|cell| cell.text().collect::<String>());
    let label = cells.next()?;
    let price = cells.next()?;
    Some((label.trim().to_owned(), price.trim().to_owned()))
}

fn parse_price(text: &str) -> Result<LiterPrice> {
    text.replace(',', ".")
        .parse::<f64>()
        .map(LiterPrice)
        .with_context(|| format!("`{text}` is not a valid price"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
    }

    #[test]
    fn test_matched_rows_overwrite_defaults() -> Result {
        let html = page(
            r"
            <tr><th>Топливо</th><th>Цена</th></tr>
            <tr><td> АИ-92 </td><td> 58,45 </td></tr>
            <tr><td>Дизельное топливо</td><td>70,10</td></tr>
            ",
        );
        let table = scan(&html, FuelPriceTable::default(), ScanPolicy::Strict)?;
        assert_eq!(table.get(Fuel::Ai92), LiterPrice(58.45));
        assert_eq!(table.get(Fuel::Ai95), Fuel::Ai95.default_price());
        assert_eq!(table.get(Fuel::Diesel), LiterPrice(70.10));
        Ok(())
    }

    #[test]
    fn test_unmatched_rows_are_not_parsed() -> Result {
        let html = page(
            r"
            <tr><td>Газ</td><td>нет данных</td></tr>
            <tr><td>АИ-95</td><td>63.20</td></tr>
            <tr><td>single cell</td></tr>
            ",
        );
        let table = scan(&html, FuelPriceTable::default(), ScanPolicy::Strict)?;
        assert_eq!(table.get(Fuel::Ai95), LiterPrice(63.2));
        Ok(())
    }

    #[test]
    fn test_no_table_keeps_defaults() -> Result {
        let table = scan("<p>Not found</p>", FuelPriceTable::default(), ScanPolicy::Strict)?;
        assert_eq!(table, FuelPriceTable::default());
        Ok(())
    }

    #[test]
    fn test_later_row_wins() -> Result {
        let html = page(
            r"
            <tr><td>АИ-92</td><td>58,00</td></tr>
            <tr><td>АИ-92 Экто</td><td>59,50</td></tr>
            ",
        );
        let table = scan(&html, FuelPriceTable::default(), ScanPolicy::Strict)?;
        assert_eq!(table.get(Fuel::Ai92), LiterPrice(59.5));
        Ok(())
    }

    #[test]
    fn test_row_may_match_several_fuels() -> Result {
        let html = page("<tr><td>АИ-92/95</td><td>60,00</td></tr>");
        let table = scan(&html, FuelPriceTable::default(), ScanPolicy::Strict)?;
        assert_eq!(table.get(Fuel::Ai92), LiterPrice(60.0));
        assert_eq!(table.get(Fuel::Ai95), LiterPrice(60.0));
        assert_eq!(table.get(Fuel::Diesel), Fuel::Diesel.default_price());
        Ok(())
    }

    #[test]
    fn test_nested_markup_in_cells() -> Result {
        let html = page("<tr><td><b>Diesel</b></td><td><span>67</span>,<span>90</span></td></tr>");
        let table = scan(&html, FuelPriceTable::default(), ScanPolicy::Strict)?;
        assert_eq!(table.get(Fuel::Diesel), LiterPrice(67.9));
        Ok(())
    }

    #[test]
    fn test_malformed_price_fails_strict_scan() {
        let html = page(
            r"
            <tr><td>АИ-92</td><td>58,45</td></tr>
            <tr><td>АИ-95</td><td>—</td></tr>
            <tr><td>Дизель</td><td>70,10</td></tr>
            ",
        );
        assert!(scan(&html, FuelPriceTable::default(), ScanPolicy::Strict).is_err());
    }

    #[test]
    fn test_malformed_price_is_skipped_when_allowed() -> Result {
        let html = page(
            r"
            <tr><td>АИ-92</td><td>58,45</td></tr>
            <tr><td>АИ-95</td><td>—</td></tr>
            <tr><td>Дизель</td><td>70,10</td></tr>
            ",
        );
        let table = scan(&html, FuelPriceTable::default(), ScanPolicy::SkipMalformed)?;
        assert_eq!(table.get(Fuel::Ai92), LiterPrice(58.45));
        assert_eq!(table.get(Fuel::Ai95), Fuel::Ai95.default_price());
        assert_eq!(table.get(Fuel::Diesel), LiterPrice(70.1));
        Ok(())
    }
}
