use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::ScrapeError;

/// Manual gate consulted when a business fails to scrape.
///
/// Returning means the operator has dealt with the suspected block (solved
/// a challenge in a browser, switched networks, ...) and the business may be
/// tried again.
#[allow(async_fn_in_trait)]
pub trait Operator {
    async fn resolve_block(&self, url: &str, error: &ScrapeError);
}

impl<T: Operator> Operator for &T {
    async fn resolve_block(&self, url: &str, error: &ScrapeError) {
        (**self).resolve_block(url, error).await
    }
}

/// Prompts on stdout and waits for Enter on stdin.
pub struct ConsoleOperator;

impl Operator for ConsoleOperator {
    async fn resolve_block(&self, url: &str, error: &ScrapeError) {
        println!("Possibly blocked while scraping {}: {}", url, error);
        println!("Open the page in a browser, clear any challenge, then press Enter to retry.");

        let mut line = String::new();
        if let Err(e) = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
        {
            log::error!("Failed to read operator confirmation: {:?}", e);
        }
    }
}
