/// Unified error handling for remote launch queries
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single round-trip against the launch-query endpoint.
///
/// One kind of failure as far as callers are concerned: transport errors,
/// non-success HTTP statuses, and bodies that do not decode as a launch page
/// all land here. The controller logs it and keeps its previous state.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("launch query transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("launch query failed with status {status}")]
    Status { status: StatusCode },
}

/// Type alias for query results
pub type QueryResult<T> = Result<T, QueryError>;
