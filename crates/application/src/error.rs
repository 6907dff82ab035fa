use template_picker_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("config error: {0}")]
    Config(String),
}
