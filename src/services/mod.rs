pub mod business_enumerator;
pub mod operator;
pub mod page_fetcher;
pub mod page_parser;
pub mod review_extractor;
pub mod search_client;

pub use business_enumerator::*;
pub use operator::*;
pub use page_fetcher::*;
pub use page_parser::*;
pub use review_extractor::*;
pub use search_client::*;
