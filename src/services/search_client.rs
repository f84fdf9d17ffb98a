use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    dal::credential_file::Credentials, domain::business::BusinessListing, error::ScrapeError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub location: String,
    pub term: String,
    pub category_filter: Option<String>,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total: usize,
    #[serde(default)]
    pub businesses: Vec<BusinessListing>,
}

#[allow(async_fn_in_trait)]
pub trait SearchApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ScrapeError>;
}

impl<T: SearchApi> SearchApi for &T {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ScrapeError> {
        (**self).search(request).await
    }
}

/// Bearer-token client for the business search endpoint.
pub struct SearchClient {
    client: Client,
    api_key: String,
    url: String,
    page_limit: u32,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    location: &'a str,
    term: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
    limit: u32,
}

impl SearchClient {
    pub fn new(
        credentials: Credentials,
        base_url: &str,
        page_limit: u32,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(SearchClient {
            client,
            api_key: credentials.api_key,
            url: format!("{}/businesses/search", base_url.trim_end_matches('/')),
            page_limit,
        })
    }
}

impl SearchApi for SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ScrapeError> {
        let query = SearchQuery {
            location: &request.location,
            term: &request.term,
            categories: request.category_filter.as_deref(),
            offset: request.offset,
            limit: self.page_limit,
        };

        let res = self
            .client
            .get(&self.url)
            .bearer_auth(&self.api_key)
            .query(&query)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| ScrapeError::transport(&self.url, e))?;

        res.json::<SearchResponse>()
            .await
            .map_err(|e| ScrapeError::transport(&self.url, e))
    }
}
