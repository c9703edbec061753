pub mod http;

pub use http::{listing_url, HttpFetcher};

use crate::error::FetchError;
use crate::parser::DateRange;
use async_trait::async_trait;

/// Where the listing markup comes from. One call per run.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_listing(&self, language: &str, date_range: DateRange) -> Result<String, FetchError>;
}
