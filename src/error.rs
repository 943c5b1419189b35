use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything here is recoverable: each variant has a defined fallback that
/// keeps the lists renderable.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, non-success HTTP status, or response decode failure
    /// on a remote backend. Callers fall back to the local cache.
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(String),

    /// User input rejected before any mutation happened.
    #[error("{0}")]
    Validation(String),

    /// A cache write failed. The mutation stays in memory for the session.
    #[error("cache write failed: {0}")]
    StorageFull(String),

    /// An import header matched none of the known list formats.
    #[error("unrecognized import format: {0:?}")]
    FormatUnrecognized(String),

    /// Config file could not be written.
    #[error("config: {0}")]
    Config(String),
}
