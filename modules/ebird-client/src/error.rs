use thiserror::Error;

pub type Result<T> = std::result::Result<T, EbirdError>;

#[derive(Debug, Error)]
pub enum EbirdError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for EbirdError {
    fn from(err: reqwest::Error) -> Self {
        EbirdError::Network(err.to_string())
    }
}
