/// Failures inside page fetching, search and page parsing.
///
/// Neither variant is handled where it is raised; both travel up to the
/// business enumerator, which treats any of them as a possible block.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {message}")]
    Transport { url: String, message: String },
    #[error("failed to parse page: {0}")]
    Parse(String),
}

impl ScrapeError {
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        ScrapeError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ScrapeError::Parse(message.into())
    }
}
