use thiserror::Error;

/// Domain-level failures. The query path is a fail-fast pass-through over
/// the store, so a store failure is the only error the core produces.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
