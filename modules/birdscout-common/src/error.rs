use thiserror::Error;

#[derive(Error, Debug)]
pub enum BirdscoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data file error: {0}")]
    DataFile(String),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("Map rendering error: {0}")]
    Map(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
