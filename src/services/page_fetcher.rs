use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::{header::USER_AGENT, Client};

use crate::error::ScrapeError;

const BROWSER_USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// GET `url` and return the body. Any network failure or non-2xx status
    /// is a `ScrapeError::Transport`.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

impl<T: PageFetcher> PageFetcher for &T {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        (**self).fetch(url).await
    }
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(HttpPageFetcher { client })
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let user_agent = BROWSER_USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(BROWSER_USER_AGENTS[0]);

        let res = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| ScrapeError::transport(url, e))?;

        res.text().await.map_err(|e| ScrapeError::transport(url, e))
    }
}
