use thiserror::Error;

/// Errors from structural mutation of a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element '{0}' not found")]
    ElementNotFound(String),
    #[error("element id '{0}' already exists in the document")]
    DuplicateId(String),
}
