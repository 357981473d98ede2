use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{Error, Result};

/// Source of page bodies. The scraper only ever needs the HTML of a URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Requests a page and returns its HTML.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Plain HTTP GET fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    // Client uses Arc so we can clone cheaply
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::FetchClient)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let to_fetch_err = |source: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(to_fetch_err)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(Error::FetchStatus {
                url: url.to_string(),
                status,
            });
        }

        let html = res.text().await.map_err(to_fetch_err)?;
        Ok(html)
    }
}
