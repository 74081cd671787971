#[derive(Debug, thiserror::Error)]
pub enum MealError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
}

pub type MealResult<T> = std::result::Result<T, MealError>;

/// Reasons a NEIS fetch can fail.
///
/// These never reach callers of the fetcher; they exist so the cause can be logged before the
/// result collapses to "no meal for this date".
#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
    #[error("request to NEIS failed: {0}")]
    Request(reqwest::Error),
    #[error("failed to read NEIS response body: {0}")]
    Body(reqwest::Error),
    #[error("NEIS response is not JSON: {0}")]
    Json(serde_json::Error),
    #[error("NEIS response has no meal row (code: {code})")]
    NoMealRow { code: String },
}
