use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown tier: {0:?}")]
    UnknownTier(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
