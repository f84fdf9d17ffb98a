use crate::{
    configuration::Settings,
    dal::{
        category_file::load_categories, credential_file::load_credentials,
        review_table::write_reviews,
    },
    run_context::RunContext,
    services::{
        BusinessEnumerator, ConsoleOperator, HttpPageFetcher, Operator, PageFetcher,
        ReviewExtractor, SearchApi, SearchClient,
    },
};

/// Scrape every configured category and write the table once at the end.
pub async fn run(configuration: Settings) -> anyhow::Result<()> {
    let app = &configuration.application;

    let credentials = load_credentials(&app.credentials_path)?;
    let categories = load_categories(&app.categories_path)?;

    let timeout = configuration.scraper.timeout();
    let search_client = SearchClient::new(
        credentials,
        &configuration.search.base_url,
        configuration.search.page_limit,
        timeout,
    )?;
    let extractor = ReviewExtractor::new(
        HttpPageFetcher::new(timeout)?,
        configuration.scraper.delay_unit(),
    );
    let enumerator = BusinessEnumerator::new(
        search_client,
        extractor,
        ConsoleOperator,
        &configuration.search.term,
    )
    .with_result_cap(configuration.search.result_cap);

    let mut context = RunContext::new(app.seed);
    harvest(&enumerator, &app.location, &categories, &mut context).await;

    write_reviews(&app.output_path, context.reviews())
}

/// Run the enumerator per category, or once unfiltered when there are none.
pub async fn harvest<S, F, O>(
    enumerator: &BusinessEnumerator<S, F, O>,
    location: &str,
    categories: &[String],
    context: &mut RunContext,
) where
    S: SearchApi,
    F: PageFetcher,
    O: Operator,
{
    if categories.is_empty() {
        harvest_category(enumerator, location, None, context).await;
        return;
    }

    for category in categories {
        harvest_category(enumerator, location, Some(category.as_str()), context).await;
    }
}

async fn harvest_category<S, F, O>(
    enumerator: &BusinessEnumerator<S, F, O>,
    location: &str,
    category: Option<&str>,
    context: &mut RunContext,
) where
    S: SearchApi,
    F: PageFetcher,
    O: Operator,
{
    log::info!(
        "Scraping {} restaurants in {}",
        category.unwrap_or("all"),
        location
    );

    match enumerator
        .all_restaurants(location, category, context.rng())
        .await
    {
        Ok(reviews) => {
            log::info!(
                "Collected {} reviews for {}, {} in total",
                reviews.len(),
                category.unwrap_or("all"),
                context.reviews().len() + reviews.len()
            );
            context.extend(reviews);
        }
        Err(e) => log::error!(
            "Search for {} restaurants failed: {}",
            category.unwrap_or("all"),
            e
        ),
    }
}
