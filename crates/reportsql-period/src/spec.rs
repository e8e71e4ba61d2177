//! Period specifications: a kind plus its optional parameters.

use serde::{Deserialize, Serialize};

use crate::kind::PeriodKind;

/// A month/year pair bounding one end of a [`PeriodKind::SpecificRange`].
///
/// `month` is 1-12 by convention; the value is passed through unvalidated,
/// callers own its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthYear {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl MonthYear {
    /// Create a month/year pair.
    #[must_use]
    pub const fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }
}

/// Optional parameters for period resolution.
///
/// Every field is optional at the type level; each [`PeriodKind`] declares
/// which subset is mandatory and the resolver rejects specs that omit it.
/// The serialized shape distinguishes "unset" from zero, so report requests
/// can omit fields that their kind does not use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodParams {
    /// Months to look back from the current month ([`PeriodKind::BackMonth`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<i32>,

    /// Range start, as months back from the current month
    /// ([`PeriodKind::RelativeRange`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_back_months: Option<i32>,

    /// Range end, as months back from the current month
    /// ([`PeriodKind::RelativeRange`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_back_months: Option<i32>,

    /// Target month, 1-12 ([`PeriodKind::SpecificMonth`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Target year ([`PeriodKind::SpecificMonth`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Range start ([`PeriodKind::SpecificRange`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<MonthYear>,

    /// Range end ([`PeriodKind::SpecificRange`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<MonthYear>,
}

/// A semantic period specifier: what range to compute, relative to a
/// reference instant supplied at resolution time.
///
/// Immutable once constructed; resolution is a pure function of the spec,
/// the reference instant, and the resolver's zone.
///
/// # Example
///
/// ```
/// use reportsql_period::{PeriodKind, PeriodSpec};
///
/// let spec = PeriodSpec::back_month(3);
/// assert_eq!(spec.kind, PeriodKind::BackMonth);
/// assert_eq!(spec.params.months, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpec {
    /// The period category.
    #[serde(rename = "type")]
    pub kind: PeriodKind,
    /// Parameters for the kinds that take them.
    #[serde(rename = "parameters", default)]
    pub params: PeriodParams,
}

impl PeriodSpec {
    /// A spec for a kind that takes no parameters (YTD, TTM, QTD, ...).
    #[must_use]
    pub fn new(kind: PeriodKind) -> Self {
        Self {
            kind,
            params: PeriodParams::default(),
        }
    }

    /// A [`PeriodKind::BackMonth`] spec looking `months` back.
    #[must_use]
    pub fn back_month(months: i32) -> Self {
        Self {
            kind: PeriodKind::BackMonth,
            params: PeriodParams {
                months: Some(months),
                ..PeriodParams::default()
            },
        }
    }

    /// A [`PeriodKind::RelativeRange`] spec from `start_back_months` back to
    /// `end_back_months` back.
    #[must_use]
    pub fn relative_range(start_back_months: i32, end_back_months: i32) -> Self {
        Self {
            kind: PeriodKind::RelativeRange,
            params: PeriodParams {
                start_back_months: Some(start_back_months),
                end_back_months: Some(end_back_months),
                ..PeriodParams::default()
            },
        }
    }

    /// A [`PeriodKind::SpecificMonth`] spec for `month`/`year`.
    #[must_use]
    pub fn specific_month(month: u32, year: i32) -> Self {
        Self {
            kind: PeriodKind::SpecificMonth,
            params: PeriodParams {
                month: Some(month),
                year: Some(year),
                ..PeriodParams::default()
            },
        }
    }

    /// A [`PeriodKind::SpecificRange`] spec from `start` to `end`.
    #[must_use]
    pub fn specific_range(start: MonthYear, end: MonthYear) -> Self {
        Self {
            kind: PeriodKind::SpecificRange,
            params: PeriodParams {
                start: Some(start),
                end: Some(end),
                ..PeriodParams::default()
            },
        }
    }
}
