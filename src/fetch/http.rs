use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use crate::parser::DateRange;

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .user_agent(source.user_agent.as_str())
            .build()
            .map_err(FetchError::from)?;

        Ok(Self {
            client,
            base_url: source.base_url.clone(),
        })
    }
}

/// `https://github.com/trending` plus an optional language segment and the
/// `since` window. The language is percent-encoded as a single segment.
pub fn listing_url(base_url: &str, language: &str, date_range: DateRange) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url).map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?;

    let language = language.trim();
    if !language.is_empty() {
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?
            .pop_if_empty()
            .push(language);
    }

    url.query_pairs_mut()
        .clear()
        .append_pair("since", date_range.as_query());

    Ok(url)
}

/// Only a plain 200 counts as success.
pub fn check_status(status: StatusCode, url: &Url) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_listing(&self, language: &str, date_range: DateRange) -> Result<String, FetchError> {
        let url = listing_url(&self.base_url, language, date_range)?;
        info!("Fetching trending listing from {}", url);

        let response = self.client.get(url.clone()).send().await?;

        if let Err(e) = check_status(response.status(), &url) {
            warn!("Listing request rejected: {}", e);
            return Err(e);
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_unfiltered() {
        let url = listing_url("https://github.com/trending", "", DateRange::Daily).unwrap();
        assert_eq!(url.as_str(), "https://github.com/trending?since=daily");
    }

    #[test]
    fn test_listing_url_with_language() {
        let url = listing_url("https://github.com/trending", "rust", DateRange::Weekly).unwrap();
        assert_eq!(url.as_str(), "https://github.com/trending/rust?since=weekly");

        let url = listing_url("https://github.com/trending/", "c#", DateRange::Monthly).unwrap();
        assert_eq!(url.as_str(), "https://github.com/trending/c%23?since=monthly");
    }

    #[test]
    fn test_listing_url_invalid_base() {
        let err = listing_url("not a url", "", DateRange::Daily).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_check_status() {
        let url = Url::parse("https://github.com/trending").unwrap();
        assert!(check_status(StatusCode::OK, &url).is_ok());

        let err = check_status(StatusCode::NOT_FOUND, &url).unwrap_err();
        match err {
            FetchError::Status { status, url } => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://github.com/trending");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // other 2xx codes are not accepted either
        assert!(check_status(StatusCode::NO_CONTENT, &url).is_err());
    }

    #[test]
    fn test_http_fetcher_builds_from_config() {
        let fetcher = HttpFetcher::new(&SourceConfig::default());
        assert!(fetcher.is_ok());
    }
}
