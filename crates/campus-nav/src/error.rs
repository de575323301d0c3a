//! Navigation-subsystem error type.
//!
//! Only map ingestion can fail hard; query-level conditions (building not
//! found, destination unreachable) are ordinary [`RouteOutcome`] variants,
//! not errors.
//!
//! [`RouteOutcome`]: crate::session::RouteOutcome

use thiserror::Error;

/// Errors produced by `campus-nav`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed map data: {0}")]
    Parse(String),
}

pub type NavResult<T> = Result<T, NavError>;
