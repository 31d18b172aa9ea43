use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid query id: {0:?}")]
    InvalidQueryId(String),
    #[error("invalid column id: {0:?}")]
    InvalidColumnId(String),
}

/// Failures from the external list/project services.
///
/// Primary-fetch failures are surfaced to the caller unchanged; the core
/// never retries and never swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,
    #[error("network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
