//! [Petrol Plus](https://petrolplus.ru/fuel_prices/) price page client.

use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderValue, StatusCode};
use reqwest::{Client, Url};

use crate::{api::price_source::PriceSource, prelude::*};

pub const DEFAULT_URL: &str = "https://petrolplus.ru/fuel_prices/sankt-peterburg/";

pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    #[instrument(skip_all, fields(url = %url, timeout = ?timeout))]
    pub fn try_new(url: Url, user_agent: &str, timeout: Duration) -> Result<Self> {
        let user_agent = HeaderValue::from_str(user_agent)
            .with_context(|| format!("invalid user agent: `{user_agent}`"))?;
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl PriceSource for Api {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn fetch_page(&self) -> Result<String> {
        info!("fetching…");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request `{}`", self.url))?;
        let status = response.status();
        ensure!(status == StatusCode::OK, "`{}` responded with `{status}`", self.url);
        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read the response from `{}`", self.url))?;
        info!(n_bytes = body.len(), "fetched");
        Ok(body)
    }
}
