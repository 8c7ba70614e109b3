use thiserror::Error;

/// The two failure classes the remote document store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("remote store unavailable: {0}")]
    Unavailable(String),
    #[error("not found")]
    NotFound,
}
