use thiserror::Error;

/// Errors raised at the configuration and record-file boundaries.
///
/// Rule and search code never fails: an illegal move is `None`, a blocked side is a loss.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("rows and columns must be at least 1 (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("rows_of_pawns must be between 1 and rows / 2 = {max} (got {rows_of_pawns})")]
    InvalidPawnRows { rows_of_pawns: usize, max: usize },

    #[error("unknown strategy '{0}' (expected evasive, conqueror, balanced or rusher)")]
    UnknownStrategy(String),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
