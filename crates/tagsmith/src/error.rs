use thiserror::Error;

use crate::tags::TagNameError;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Invalid tag name: {0}")]
    InvalidTagName(String),

    #[error("Invalid attribute key: {0:?} (keys must be non-empty strings)")]
    InvalidAttributeKey(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl From<TagNameError> for MarkupError {
    fn from(err: TagNameError) -> Self {
        MarkupError::InvalidTagName(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarkupError>;
