use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsSieveError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error("Invalid limit: {0}")]
    InvalidLimit(u64),
    #[error("Failed to allocate {words} words for limit {limit}")]
    AllocationFailed { limit: u64, words: usize },
    #[error("Invalid time budget: {0} seconds")]
    InvalidTimeBudget(f64),
}

pub type Result<T, E = PsSieveError> = std::result::Result<T, E>;
