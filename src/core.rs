pub mod calculator;
pub mod fuel;
pub mod provider;
pub mod scrape;
