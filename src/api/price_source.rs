use async_trait::async_trait;

use crate::prelude::*;

/// Remote page listing the current fuel prices.
#[async_trait]
pub trait PriceSource: Sync {
    /// Fetch the raw page body.
    ///
    /// Anything but a successful response must be an error.
    async fn fetch_page(&self) -> Result<String>;
}
