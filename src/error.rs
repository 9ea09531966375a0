use thiserror::Error;

pub type AnnotatorResult<T> = Result<T, AnnotatorError>;

#[derive(Debug, Error)]
pub enum AnnotatorError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
