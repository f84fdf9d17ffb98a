use rand::Rng;

use crate::{
    domain::{business::BusinessListing, review::Review},
    error::ScrapeError,
};

use super::{Operator, PageFetcher, ReviewExtractor, SearchApi, SearchRequest};

/// The search API will not page past this many results.
pub const MAX_RESULTS: usize = 1000;

pub struct BusinessEnumerator<S, F, O> {
    search: S,
    extractor: ReviewExtractor<F>,
    operator: O,
    term: String,
    result_cap: usize,
}

impl<S, F, O> BusinessEnumerator<S, F, O>
where
    S: SearchApi,
    F: PageFetcher,
    O: Operator,
{
    pub fn new(search: S, extractor: ReviewExtractor<F>, operator: O, term: &str) -> Self {
        BusinessEnumerator {
            search,
            extractor,
            operator,
            term: term.to_string(),
            result_cap: MAX_RESULTS,
        }
    }

    /// Lower the result ceiling. Values above `MAX_RESULTS` are ignored.
    pub fn with_result_cap(mut self, result_cap: usize) -> Self {
        self.result_cap = result_cap.min(MAX_RESULTS);
        self
    }

    /// Retrieve the reviews of every business matching `query` (a location)
    /// and the optional category.
    ///
    /// A business that fails twice is skipped, so the result may cover fewer
    /// businesses than the search reported. Only a failing first search is
    /// returned as an error; a later page failing ends paging with the reviews
    /// collected so far.
    pub async fn all_restaurants<R: Rng>(
        &self,
        query: &str,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<Vec<Review>, ScrapeError> {
        let mut request = SearchRequest {
            location: query.to_string(),
            term: self.term.clone(),
            category_filter: category.map(|c| c.to_string()),
            offset: None,
        };

        let response = self.search.search(&request).await?;
        let total = clamp_total(response.total, self.result_cap);

        let mut results = vec![];
        let mut seen = 0;

        for business in response.businesses.iter().take(total) {
            seen += 1;
            log::info!("{}/{}: {}", seen, total, business.url);
            results.extend(self.extract_with_retry(business, category, &mut *rng).await);
        }

        while seen < total {
            request.offset = Some(seen);
            let response = match self.search.search(&request).await {
                Ok(response) => response,
                Err(e) => {
                    log::error!(
                        "Search failed at offset {} of {}, keeping {} reviews: {}",
                        seen,
                        total,
                        results.len(),
                        e
                    );
                    break;
                }
            };

            if response.businesses.is_empty() {
                log::warn!(
                    "Search returned no businesses at offset {} of {}, stopping",
                    seen,
                    total
                );
                break;
            }

            for business in response.businesses.iter().take(total - seen) {
                seen += 1;
                log::info!("{}/{}: {}", seen, total, business.url);
                results.extend(self.extract_with_retry(business, category, &mut *rng).await);
            }
        }

        Ok(results)
    }

    /// One attempt, then the operator gate, then one retry. A second failure
    /// drops the business.
    async fn extract_with_retry<R: Rng>(
        &self,
        business: &BusinessListing,
        category: Option<&str>,
        rng: &mut R,
    ) -> Vec<Review> {
        let err = match self
            .extractor
            .extract_reviews(&business.url, category, &mut *rng)
            .await
        {
            Ok(reviews) => return reviews,
            Err(e) => e,
        };

        log::error!("Failed to scrape {}, possibly blocked: {}", business.url, err);
        self.operator.resolve_block(&business.url, &err).await;

        match self
            .extractor
            .extract_reviews(&business.url, category, &mut *rng)
            .await
        {
            Ok(reviews) => reviews,
            Err(e) => {
                log::error!("Skipping {} after retry: {}", business.url, e);
                vec![]
            }
        }
    }
}

pub fn clamp_total(total: usize, cap: usize) -> usize {
    if total > cap {
        log::warn!(
            "Search reported {} businesses, only the first {} are reachable",
            total,
            cap
        );
        return cap;
    }
    total
}
