//! Period resolution error types.

use thiserror::Error;

use crate::kind::PeriodKind;

/// Error returned when a period spec cannot be resolved to a date range.
///
/// Resolution never panics: every invalid input surfaces here, and no range
/// accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// A parameter the kind requires was not supplied.
    #[error("{fields} required for {kind}")]
    MissingParameter {
        /// The kind that was being resolved.
        kind: PeriodKind,
        /// Description of the missing parameter field(s).
        fields: &'static str,
    },

    /// A period kind name that is not one of the known wire names.
    ///
    /// Raised when parsing kind strings; a constructed [`PeriodKind`] is
    /// always valid.
    #[error("invalid date config type: {0}")]
    InvalidKind(String),
}
