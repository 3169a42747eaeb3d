use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid tag format: {0}")]
    InvalidTagFormat(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration key: {0}")]
    MissingConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
