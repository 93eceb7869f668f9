use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

use crate::{
    api::PriceSource,
    core::{
        fuel::FuelPriceTable,
        scrape::{ScanPolicy, scan},
    },
    prelude::*,
};

/// Fuel prices as of some moment.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct PriceSnapshot {
    pub table: FuelPriceTable,

    /// Whether the remote page has been fetched and scanned successfully.
    ///
    /// Says nothing about how many fuels were actually found there.
    pub is_live: bool,

    pub fetched_at: DateTime<Local>,
}

impl PriceSnapshot {
    const fn fallback(fetched_at: DateTime<Local>) -> Self {
        Self { table: FuelPriceTable::DEFAULT, is_live: false, fetched_at }
    }

    fn is_fresh(&self, now: DateTime<Local>, ttl: TimeDelta) -> bool {
        let age = now.signed_duration_since(self.fetched_at);
        age >= TimeDelta::zero() && age < ttl
    }
}

/// Provides the fuel prices, fetching them at most once per cache window.
///
/// The provider never fails: on any error it falls back to the archived prices.
#[derive(bon::Builder)]
pub struct PriceProvider<S> {
    source: S,

    #[builder(default)]
    policy: ScanPolicy,

    #[builder(default = TimeDelta::hours(1))]
    ttl: TimeDelta,

    #[builder(skip)]
    cached: Option<PriceSnapshot>,
}

impl<S: PriceSource> PriceProvider<S> {
    pub async fn get_prices(&mut self) -> PriceSnapshot {
        self.get_prices_at(Local::now()).await
    }

    #[instrument(skip_all, fields(now = %now))]
    pub async fn get_prices_at(&mut self, now: DateTime<Local>) -> PriceSnapshot {
        if let Some(snapshot) = self.cached
            && snapshot.is_fresh(now, self.ttl)
        {
            debug!(fetched_at = %snapshot.fetched_at, is_live = snapshot.is_live, "cache hit");
            return snapshot;
        }
        let snapshot = match self.fetch().await {
            Ok(table) => PriceSnapshot { table, is_live: true, fetched_at: now },
            Err(error) => {
                warn!("failed to fetch the fuel prices, using the archived ones: {error:#}");
                PriceSnapshot::fallback(now)
            }
        };
        self.cached = Some(snapshot);
        snapshot
    }

    async fn fetch(&self) -> Result<FuelPriceTable> {
        let page = self.source.fetch_page().await?;
        scan(&page, FuelPriceTable::DEFAULT, self.policy).context("failed to scan the price page")
    }
}
