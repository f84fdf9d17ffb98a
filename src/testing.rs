//! Fakes and HTML fixtures shared by the unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::{
    domain::business::BusinessListing,
    error::ScrapeError,
    services::{Operator, PageFetcher, SearchApi, SearchRequest, SearchResponse},
};

pub struct PageFixture {
    pub name: &'static str,
    pub price: Option<&'static str>,
    pub categories: &'static [&'static str],
    pub first_review: usize,
    pub reviews: usize,
    /// Replaces every rating when set.
    pub rating: Option<&'static str>,
    pub next: Option<&'static str>,
}

impl Default for PageFixture {
    fn default() -> Self {
        PageFixture {
            name: "Primanti Bros.",
            price: Some("$$"),
            categories: &["Sandwiches", "Bars"],
            first_review: 0,
            reviews: 1,
            rating: None,
            next: None,
        }
    }
}

pub fn business_page(fixture: &PageFixture) -> String {
    let price = fixture
        .price
        .map(|p| format!(r#"<span class="business-attribute price-range">{}</span>"#, p))
        .unwrap_or_default();

    let categories = fixture
        .categories
        .iter()
        .map(|c| format!(r#"<a href="/c/{}">{}</a>"#, c.to_lowercase(), c))
        .collect::<Vec<String>>()
        .join(", ");

    let reviews: String = (fixture.first_review..fixture.first_review + fixture.reviews)
        .map(|i| {
            let rating = fixture
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| format!("{}.0", i % 5 + 1));
            format!(
                r#"<div class="review" itemprop="review">
                    <meta itemprop="author" content="user-{i}">
                    <meta itemprop="datePublished" content="2016-03-{day:02}">
                    <div itemprop="reviewRating"><meta itemprop="ratingValue" content="{rating}"></div>
                    <p itemprop="description" lang="en">Review number {i}</p>
                </div>"#,
                i = i,
                day = i % 28 + 1,
                rating = rating,
            )
        })
        .collect();

    let next = fixture
        .next
        .map(|href| {
            format!(
                r#"<a class="u-decoration-none next pagination-links_anchor" href="{}">Next</a>"#,
                href
            )
        })
        .unwrap_or_default();

    format!(
        r#"<html><body>
            <h1 class="biz-page-title">
                {name}
            </h1>
            <div class="price-category">
                {price}
                <span class="category-str-list">{categories}</span>
            </div>
            <ul class="reviews">{reviews}</ul>
            <div class="pagination-links">{next}</div>
        </body></html>"#,
        name = fixture.name,
        price = price,
        categories = categories,
        reviews = reviews,
        next = next,
    )
}

pub fn listing(id: &str) -> BusinessListing {
    BusinessListing {
        id: id.to_string(),
        name: format!("Business {}", id),
        url: format!("https://www.yelp.com/biz/{}", id),
    }
}

/// Serves canned pages, optionally failing the first `n` requests of a URL.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    failures: RefCell<HashMap<String, usize>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        FakeFetcher::default()
    }

    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    pub fn failing(self, url: &str, times: usize) -> Self {
        self.failures.borrow_mut().insert(url.to_string(), times);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.requests.borrow_mut().push(url.to_string());

        if let Some(remaining) = self.failures.borrow_mut().get_mut(url) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(ScrapeError::transport(url, "connection reset by peer"));
            }
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::transport(url, "404 Not Found"))
    }
}

/// Pages through a fixed listing by offset.
pub struct FakeSearch {
    listings: Vec<BusinessListing>,
    page_size: usize,
    total: usize,
    fail: bool,
    fail_paging: bool,
    requests: RefCell<Vec<SearchRequest>>,
}

impl FakeSearch {
    pub fn new(listings: Vec<BusinessListing>, page_size: usize) -> Self {
        FakeSearch {
            total: listings.len(),
            listings,
            page_size,
            fail: false,
            fail_paging: false,
            requests: RefCell::new(vec![]),
        }
    }

    pub fn reporting_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Answers the first page, then fails every request with an offset.
    pub fn failing_after_first_page(mut self) -> Self {
        self.fail_paging = true;
        self
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.borrow().clone()
    }
}

impl SearchApi for FakeSearch {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ScrapeError> {
        self.requests.borrow_mut().push(request.clone());

        if self.fail || (self.fail_paging && request.offset.is_some()) {
            return Err(ScrapeError::transport("search", "503 Service Unavailable"));
        }

        let start = request.offset.unwrap_or(0).min(self.listings.len());
        let end = (start + self.page_size).min(self.listings.len());

        Ok(SearchResponse {
            total: self.total,
            businesses: self.listings[start..end].to_vec(),
        })
    }
}

/// Resolves every suspected block immediately.
#[derive(Default)]
pub struct AutoOperator {
    interventions: Cell<usize>,
}

impl AutoOperator {
    pub fn interventions(&self) -> usize {
        self.interventions.get()
    }
}

impl Operator for AutoOperator {
    async fn resolve_block(&self, _url: &str, _error: &ScrapeError) {
        self.interventions.set(self.interventions.get() + 1);
    }
}
