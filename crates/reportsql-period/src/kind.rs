//! Named period categories used in financial reporting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PeriodError;

/// A named category of calendar date range.
///
/// Kinds serialize to the wire names used by report requests
/// (`"CURRENT_MONTH"`, `"YTD"`, `"TTM"`, ...). Each kind declares which
/// [`PeriodParams`](crate::PeriodParams) fields are mandatory; the resolver
/// enforces that at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodKind {
    /// The first through the last day of the current month.
    CurrentMonth,
    /// A single month, `months` back from the current one.
    ///
    /// With `months = 3` in April 2024 this is January 1-31, 2024.
    BackMonth,
    /// A span bounded by two look-back counts, `start_back_months` and
    /// `end_back_months`.
    ///
    /// With 6 and 3 in April 2024 this is October 2023 through January 2024.
    RelativeRange,
    /// Year to date: January 1 through the end of the current month.
    Ytd,
    /// The complete previous calendar year.
    PreviousYear,
    /// One specific month, given by `month` and `year`.
    SpecificMonth,
    /// A custom span from `start` to `end` month/year pairs.
    SpecificRange,
    /// Quarter to date: start of the current quarter through the end of the
    /// current month.
    Qtd,
    /// Trailing twelve months: a rolling window ending with the current
    /// (partial) month.
    Ttm,
    /// Month over month: previous month start through current month end.
    #[serde(rename = "MOM")]
    MonthOverMonth,
    /// The complete previous calendar quarter, wrapping into Q4 of the
    /// previous year from Q1.
    PreviousQuarter,
}

impl PeriodKind {
    /// The wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentMonth => "CURRENT_MONTH",
            Self::BackMonth => "BACK_MONTH",
            Self::RelativeRange => "RELATIVE_RANGE",
            Self::Ytd => "YTD",
            Self::PreviousYear => "PREVIOUS_YEAR",
            Self::SpecificMonth => "SPECIFIC_MONTH",
            Self::SpecificRange => "SPECIFIC_RANGE",
            Self::Qtd => "QTD",
            Self::Ttm => "TTM",
            Self::MonthOverMonth => "MOM",
            Self::PreviousQuarter => "PREVIOUS_QUARTER",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CURRENT_MONTH" => Ok(Self::CurrentMonth),
            "BACK_MONTH" => Ok(Self::BackMonth),
            "RELATIVE_RANGE" => Ok(Self::RelativeRange),
            "YTD" => Ok(Self::Ytd),
            "PREVIOUS_YEAR" => Ok(Self::PreviousYear),
            "SPECIFIC_MONTH" => Ok(Self::SpecificMonth),
            "SPECIFIC_RANGE" => Ok(Self::SpecificRange),
            "QTD" => Ok(Self::Qtd),
            "TTM" => Ok(Self::Ttm),
            "MOM" => Ok(Self::MonthOverMonth),
            "PREVIOUS_QUARTER" => Ok(Self::PreviousQuarter),
            other => Err(PeriodError::InvalidKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        let kinds = [
            PeriodKind::CurrentMonth,
            PeriodKind::BackMonth,
            PeriodKind::RelativeRange,
            PeriodKind::Ytd,
            PeriodKind::PreviousYear,
            PeriodKind::SpecificMonth,
            PeriodKind::SpecificRange,
            PeriodKind::Qtd,
            PeriodKind::Ttm,
            PeriodKind::MonthOverMonth,
            PeriodKind::PreviousQuarter,
        ];
        for kind in kinds {
            assert_eq!(kind.as_str().parse::<PeriodKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "FISCAL_FORTNIGHT".parse::<PeriodKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date config type: FISCAL_FORTNIGHT"
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&PeriodKind::MonthOverMonth).unwrap();
        assert_eq!(json, "\"MOM\"");
        let kind: PeriodKind = serde_json::from_str("\"PREVIOUS_QUARTER\"").unwrap();
        assert_eq!(kind, PeriodKind::PreviousQuarter);
    }
}
