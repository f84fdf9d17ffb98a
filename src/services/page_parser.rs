use itertools::Itertools;
use url::Url;

use crate::{
    domain::{
        business::{BusinessHint, BusinessProfile, UNKNOWN_PRICE},
        review::Review,
        review_page::{ReviewBlock, ReviewPage},
    },
    error::ScrapeError,
};

#[derive(Debug)]
pub struct ParsedPage {
    pub profile: BusinessProfile,
    pub reviews: Vec<Review>,
    pub next_page: Option<String>,
}

/// Parse the reviews on a single page of a business.
///
/// `page_url` is only used to resolve a relative next-page link. On a first
/// page (no name in `hint`) a missing heading or price block means the fetch
/// did not return a business page, most likely a captcha.
pub fn parse_page(
    html: &str,
    page_url: &str,
    hint: &BusinessHint,
) -> Result<ParsedPage, ScrapeError> {
    let page = ReviewPage::parse(html);

    let profile = match hint.is_first_page() {
        true => first_page_profile(&page, hint, page_url)?,
        false => BusinessProfile {
            name: hint.name.clone().unwrap_or_default(),
            price: hint.price.unwrap_or(UNKNOWN_PRICE),
            categories: hint.categories.clone().unwrap_or_default(),
        },
    };

    let reviews = page
        .review_blocks()
        .into_iter()
        .enumerate()
        .map(|(i, block)| review_from_block(&profile, block, i))
        .collect::<Result<Vec<Review>, ScrapeError>>()?;

    let next_page = page.next_link().map(|href| resolve_link(page_url, &href));

    Ok(ParsedPage {
        profile,
        reviews,
        next_page,
    })
}

fn first_page_profile(
    page: &ReviewPage,
    hint: &BusinessHint,
    page_url: &str,
) -> Result<BusinessProfile, ScrapeError> {
    let name = page
        .heading()
        .ok_or_else(|| ScrapeError::parse(format!("no business heading on {}", page_url)))?;

    if !page.has_price_category() {
        return Err(ScrapeError::parse(format!("no price block on {}", page_url)));
    }

    let price = match hint.price {
        Some(price) => price,
        None => price_tier(page.price_indicator().as_deref()),
    };

    let categories = match &hint.categories {
        Some(categories) => categories.clone(),
        None => page
            .category_links()
            .map(|links| links.iter().join(","))
            .unwrap_or_default(),
    };

    Ok(BusinessProfile {
        name,
        price,
        categories,
    })
}

/// One price symbol per level, so the tier is the symbol count.
pub fn price_tier(indicator: Option<&str>) -> i32 {
    match indicator {
        Some(symbols) => symbols.chars().count() as i32,
        None => UNKNOWN_PRICE,
    }
}

fn review_from_block(
    profile: &BusinessProfile,
    block: ReviewBlock,
    index: usize,
) -> Result<Review, ScrapeError> {
    let missing = |field: &str| ScrapeError::parse(format!("review {} has no {}", index, field));

    let user = block.author.ok_or_else(|| missing("author"))?;
    let date = block.date_published.ok_or_else(|| missing("datePublished"))?;
    let rating = block.rating_value.ok_or_else(|| missing("ratingValue"))?;
    let text = block.description.ok_or_else(|| missing("description"))?;

    Ok(Review::new(profile, user, date, parse_rating(&rating)?, text))
}

pub fn parse_rating(value: &str) -> Result<f64, ScrapeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| ScrapeError::parse(format!("invalid rating {:?}: {}", value, e)))
}

fn resolve_link(page_url: &str, href: &str) -> String {
    match Url::parse(page_url).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}
