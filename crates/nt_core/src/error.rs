use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    
    #[error("News provider error: {0}")]
    Provider(String),
    
    #[error("Inference error: {0}")]
    Inference(String),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::InvalidUrl(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
