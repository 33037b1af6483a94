//! Error and outcome types for graph queries.
//!
//! Only malformed requests are errors. A query that runs but has nothing
//! to report (no chain between two people, nobody at a school) returns an
//! empty value instead; [`OutcomeKind`] names every case for reporting.

use serde::Serialize;
use std::fmt;

/// Errors reported before any traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A required argument was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A supplied name matches nobody in the graph.
    #[error("person not found: '{0}'")]
    PersonNotFound(String),
}

impl QueryError {
    /// Returns the outcome category of this error.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            QueryError::InvalidInput(_) => OutcomeKind::InvalidInput,
            QueryError::PersonNotFound(_) => OutcomeKind::NotFound,
        }
    }
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Every way a query can conclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The query produced a non-empty answer
    Found,
    /// An argument was missing or empty
    InvalidInput,
    /// A named person does not exist
    NotFound,
    /// Both people exist but no chain connects them
    Unreachable,
    /// The query was valid but its answer is empty
    EmptyResult,
}

impl OutcomeKind {
    /// Returns true for outcomes caused by a bad request.
    pub fn is_error(&self) -> bool {
        matches!(self, OutcomeKind::InvalidInput | OutcomeKind::NotFound)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutcomeKind::Found => "found",
            OutcomeKind::InvalidInput => "invalid input",
            OutcomeKind::NotFound => "person not found",
            OutcomeKind::Unreachable => "unreachable",
            OutcomeKind::EmptyResult => "empty result",
        };
        write!(f, "{}", s)
    }
}
