use std::time::Duration;

use chrono::TimeDelta;
use clap::Parser;
use reqwest::Url;

use crate::{
    api::{PetrolPlus, petrol_plus},
    core::{provider::PriceProvider, scrape::ScanPolicy},
    prelude::*,
};

#[derive(Parser)]
pub struct SourceArgs {
    /// Fuel price page URL.
    #[clap(
        long = "prices-url",
        env = "FUEL_PRICES_URL",
        default_value = petrol_plus::DEFAULT_URL,
        global = true,
    )]
    pub url: Url,

    #[clap(
        long = "user-agent",
        env = "FUEL_PRICES_USER_AGENT",
        default_value = "Mozilla/5.0",
        global = true
    )]
    pub user_agent: String,

    #[clap(
        long = "fetch-timeout-secs",
        env = "FUEL_PRICES_TIMEOUT_SECS",
        default_value = "5",
        global = true
    )]
    pub timeout_secs: u64,

    /// How long the fetched prices stay valid.
    #[clap(
        long = "cache-ttl-secs",
        env = "FUEL_PRICES_CACHE_TTL_SECS",
        default_value = "3600",
        global = true
    )]
    pub cache_ttl_secs: u32,

    /// Skip price rows that cannot be parsed instead of discarding the whole page.
    #[clap(long, env = "FUEL_PRICES_SKIP_MALFORMED", global = true)]
    pub skip_malformed_rows: bool,
}

impl SourceArgs {
    pub fn try_new_provider(&self) -> Result<PriceProvider<PetrolPlus>> {
        let source = PetrolPlus::try_new(
            self.url.clone(),
            &self.user_agent,
            Duration::from_secs(self.timeout_secs),
        )?;
        Ok(PriceProvider::builder()
            .source(source)
            .policy(self.policy())
            .ttl(TimeDelta::seconds(self.cache_ttl_secs.into()))
            .build())
    }

    const fn policy(&self) -> ScanPolicy {
        if self.skip_malformed_rows { ScanPolicy::SkipMalformed } else { ScanPolicy::Strict }
    }
}
