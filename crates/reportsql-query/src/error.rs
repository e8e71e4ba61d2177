//! Query assembly error types.

use thiserror::Error;

use reportsql_period::PeriodError;

/// Error returned when assembling a query or one of its fragments fails.
///
/// The first error encountered during composition aborts the whole build;
/// partially accumulated fragments and arguments are discarded, never
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The operator and the shape of the supplied value disagree.
    #[error("{0}")]
    TypeMismatch(&'static str),

    /// `IN` / `NOT IN` was given an empty list of values.
    #[error("empty slice provided for IN/NOT IN operator")]
    EmptyCollection,

    /// A select clause was built with no fields at all.
    #[error("no fields specified for select")]
    NoFieldsSpecified,

    /// Date-range resolution failed.
    #[error("failed to calculate date range: {0}")]
    DateRange(#[from] PeriodError),
}
