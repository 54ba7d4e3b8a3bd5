//! Time-model error type.
//!
//! Raised only by the parsing constructors in [`crate::time`].  Ingestion
//! crates wrap it as one variant of their own error enum.

use thiserror::Error;

use crate::TimeOfDay;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown weekday token {0:?}")]
    InvalidWeekday(String),

    #[error("invalid time of day {0:?}")]
    InvalidTime(String),

    #[error("empty interval: start {start} is not before end {end}")]
    EmptyInterval { start: TimeOfDay, end: TimeOfDay },
}

/// Shorthand result type for `tt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
