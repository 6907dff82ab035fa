use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("index {index} is outside the catalog of {len} images")]
    InvalidIndex { index: usize, len: usize },
    #[error("template id must be positive, got {0}")]
    InvalidTemplateId(u32),
    #[error("template {id} does not exist in a catalog of {len} images")]
    UnknownTemplate { id: u32, len: usize },
}
