// Error types shared by the calculator core and its collaborators
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShippingError>;

#[derive(Debug, Error)]
pub enum ShippingError {
    /// A rate map referenced a ticker the material registry does not know.
    #[error("Unknown material ticker: {0}")]
    UnknownMaterial(String),

    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FIO API request {url} failed with status {status}")]
    Api { status: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to load fixture '{path}': {message}")]
    Fixture { path: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
