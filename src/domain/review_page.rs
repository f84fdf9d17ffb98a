use scraper::{ElementRef, Html, Selector};

/// Typed view over one business review page.
///
/// Accessors return `None` when the element is missing; deciding whether a
/// missing element is an error is left to the page parser.
pub struct ReviewPage {
    document: Html,
    selectors: PageSelectors,
}

/// Raw fields of a single `itemprop=review` container.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewBlock {
    pub author: Option<String>,
    pub date_published: Option<String>,
    pub rating_value: Option<String>,
    pub description: Option<String>,
}

struct PageSelectors {
    heading: Selector,
    price_category: Selector,
    price_range: Selector,
    category_links: Selector,
    review: Selector,
    author: Selector,
    date_published: Selector,
    rating_value: Selector,
    description: Selector,
    next_link: Selector,
}

impl PageSelectors {
    fn new() -> Self {
        PageSelectors {
            heading: Selector::parse("h1").unwrap(),
            price_category: Selector::parse("div.price-category").unwrap(),
            price_range: Selector::parse("span.business-attribute.price-range").unwrap(),
            category_links: Selector::parse("span.category-str-list a").unwrap(),
            review: Selector::parse(r#"div[itemprop="review"]"#).unwrap(),
            author: Selector::parse(r#"meta[itemprop="author"]"#).unwrap(),
            date_published: Selector::parse(r#"meta[itemprop="datePublished"]"#).unwrap(),
            rating_value: Selector::parse(r#"meta[itemprop="ratingValue"]"#).unwrap(),
            description: Selector::parse(r#"p[itemprop="description"]"#).unwrap(),
            next_link: Selector::parse("a.next.pagination-links_anchor").unwrap(),
        }
    }
}

impl ReviewPage {
    pub fn parse(html: &str) -> Self {
        ReviewPage {
            document: Html::parse_document(html),
            selectors: PageSelectors::new(),
        }
    }

    /// Text of the first `h1`, whitespace trimmed.
    pub fn heading(&self) -> Option<String> {
        self.document
            .select(&self.selectors.heading)
            .next()
            .map(|h1| h1.text().collect::<String>().trim().to_string())
    }

    pub fn has_price_category(&self) -> bool {
        self.price_category().is_some()
    }

    /// Rendered text of the price range span, e.g. `$$`.
    pub fn price_indicator(&self) -> Option<String> {
        self.price_category().and_then(|container| {
            container
                .select(&self.selectors.price_range)
                .next()
                .map(|span| span.text().collect::<String>().trim().to_string())
        })
    }

    /// Category links inside the price container. `None` when there are none.
    pub fn category_links(&self) -> Option<Vec<String>> {
        let links: Vec<String> = self
            .price_category()
            .map(|container| {
                container
                    .select(&self.selectors.category_links)
                    .map(|a| a.text().collect::<String>().trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        match links.is_empty() {
            true => None,
            false => Some(links),
        }
    }

    pub fn review_blocks(&self) -> Vec<ReviewBlock> {
        self.document
            .select(&self.selectors.review)
            .map(|review| ReviewBlock {
                author: meta_content(review, &self.selectors.author),
                date_published: meta_content(review, &self.selectors.date_published),
                rating_value: meta_content(review, &self.selectors.rating_value),
                description: review
                    .select(&self.selectors.description)
                    .next()
                    .map(|p| p.text().collect()),
            })
            .collect()
    }

    pub fn next_link(&self) -> Option<String> {
        self.document
            .select(&self.selectors.next_link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.to_string())
    }

    fn price_category(&self) -> Option<ElementRef<'_>> {
        self.document.select(&self.selectors.price_category).next()
    }
}

fn meta_content(review: ElementRef<'_>, selector: &Selector) -> Option<String> {
    review
        .select(selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.to_string())
}
