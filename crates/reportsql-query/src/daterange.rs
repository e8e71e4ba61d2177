//! Calendar-period predicates over denormalized period columns.
//!
//! Report storage keeps the posting period as separate `period_year` and
//! `period_month` integer columns rather than a date column; the emitted
//! predicate has to match that layout exactly.

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use reportsql_period::{PeriodSpec, Resolver};

use crate::error::BuildError;
use crate::value::{SqlFragment, SqlValue};

/// Filters rows to the calendar period described by a [`PeriodSpec`].
///
/// By default the spec is resolved against the wall clock at build time. Pin
/// the reference instant with [`at`](Self::at) for deterministic builds —
/// tests rely on this, and report servers use it to render "as of" views.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use reportsql_query::DateRangeCondition;
/// use reportsql_period::PeriodSpec;
///
/// let condition = DateRangeCondition::new(PeriodSpec::back_month(3))
///     .at(Utc.with_ymd_and_hms(2024, 4, 15, 3, 30, 0).unwrap());
/// let fragment = condition.build(1).unwrap();
/// assert_eq!(
///     fragment.sql,
///     "period_year = $1 AND period_month BETWEEN $2 AND $3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeCondition {
    spec: PeriodSpec,
    resolver: Resolver,
    reference: Option<DateTime<Utc>>,
}

impl DateRangeCondition {
    /// Create a condition that resolves `spec` in the default reporting zone.
    #[must_use]
    pub fn new(spec: PeriodSpec) -> Self {
        Self {
            spec,
            resolver: Resolver::default(),
            reference: None,
        }
    }

    /// Resolve with `resolver` instead of the default one.
    #[must_use]
    pub const fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Pin the reference instant instead of sampling the wall clock.
    #[must_use]
    pub const fn at(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// The spec this condition resolves.
    #[must_use]
    pub const fn spec(&self) -> &PeriodSpec {
        &self.spec
    }

    /// Render this predicate starting at the 1-based `param_offset`.
    ///
    /// Single-year ranges consume three parameters
    /// (`period_year = $N AND period_month BETWEEN $N+1 AND $N+2`); ranges
    /// crossing a year boundary consume four, as two OR-ed year/month
    /// half-ranges.
    ///
    /// # Errors
    ///
    /// [`BuildError::DateRange`] when the spec omits a parameter its kind
    /// requires.
    pub fn build(&self, param_offset: usize) -> Result<SqlFragment, BuildError> {
        debug!(param_offset, kind = %self.spec.kind, "building date range condition");
        let now = self.reference.unwrap_or_else(Utc::now);
        let range = self.resolver.resolve(&self.spec, now)?;

        let (start_year, end_year) = (range.start.year(), range.end.year());
        let (start_month, end_month) = (range.start.month(), range.end.month());

        if start_year == end_year {
            let sql = format!(
                "period_year = ${} AND period_month BETWEEN ${} AND ${}",
                param_offset,
                param_offset + 1,
                param_offset + 2,
            );
            let args = vec![
                SqlValue::from(start_year),
                SqlValue::from(start_month),
                SqlValue::from(end_month),
            ];
            return Ok(SqlFragment::new(sql, args));
        }

        let sql = format!(
            "(period_year = ${} AND period_month >= ${}) OR (period_year = ${} AND period_month <= ${})",
            param_offset,
            param_offset + 1,
            param_offset + 2,
            param_offset + 3,
        );
        let args = vec![
            SqlValue::from(start_year),
            SqlValue::from(start_month),
            SqlValue::from(end_year),
            SqlValue::from(end_month),
        ];
        Ok(SqlFragment::new(sql, args))
    }
}
