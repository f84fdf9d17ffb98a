use std::{collections::HashSet, time::Duration};

use rand::Rng;

use crate::{
    domain::{business::BusinessHint, review::Review},
    error::ScrapeError,
};

use super::{page_parser::parse_page, PageFetcher};

pub struct ReviewExtractor<F> {
    fetcher: F,
    delay_unit: Duration,
}

impl<F: PageFetcher> ReviewExtractor<F> {
    pub fn new(fetcher: F, delay_unit: Duration) -> Self {
        ReviewExtractor {
            fetcher,
            delay_unit,
        }
    }

    /// Retrieve every review of one business by following its pagination.
    ///
    /// The first page fixes the business name and price (and the categories
    /// when `category` is `None`); later pages only contribute reviews. Errors
    /// are returned as-is, retrying is up to the caller.
    pub async fn extract_reviews<R: Rng>(
        &self,
        url: &str,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<Vec<Review>, ScrapeError> {
        let html = self.fetcher.fetch(url).await?;
        let first_page = parse_page(&html, url, &BusinessHint::with_categories(category))?;

        let hint = BusinessHint::from(&first_page.profile);
        let mut all_reviews = first_page.reviews;
        let mut next_page = first_page.next_page;
        let mut visited = HashSet::from([url.to_string()]);

        while let Some(page_url) = next_page {
            if !visited.insert(page_url.clone()) {
                log::warn!("Pagination of {} loops back to {}, stopping", url, page_url);
                break;
            }

            tokio::time::sleep(jittered_delay(&mut *rng, self.delay_unit)).await;

            let html = self.fetcher.fetch(&page_url).await?;
            let page = parse_page(&html, &page_url, &hint)?;
            all_reviews.extend(page.reviews);
            next_page = page.next_page;
        }

        log::info!("Extracted {} reviews from {}", all_reviews.len(), url);

        Ok(all_reviews)
    }
}

/// Uniform in `[0.5, 1.5)` units.
pub fn jittered_delay<R: Rng>(rng: &mut R, unit: Duration) -> Duration {
    unit.mul_f64(rng.gen_range(0.5..1.5))
}
