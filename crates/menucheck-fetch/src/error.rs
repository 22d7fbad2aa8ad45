use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Status code is {status} when requesting {url}")]
    Status { status: u16, url: String },

    #[error("All {retries} retries exhausted for {url}: {last_error}")]
    RetriesExhausted {
        url: String,
        retries: u32,
        last_error: String,
    },

    #[error("Page {page} not available: {reason}")]
    Page { page: u32, reason: String },
}
