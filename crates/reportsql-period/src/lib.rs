//! Calendar period resolution for financial reporting.
//!
//! This crate turns semantic period specifiers — "year to date", "trailing
//! twelve months", "three months back" — into concrete start/end instants in
//! a fixed reporting time zone:
//!
//! - [`PeriodKind`] - the named period categories (YTD, QTD, TTM, ...)
//! - [`PeriodSpec`] - a kind plus its optional parameters, JSON-shaped
//! - [`Resolver`] - resolves a spec against an explicit reference instant
//! - [`ResolvedRange`] - the resulting inclusive `[start, end]` range
//!
//! All calendar arithmetic happens in the resolver's zone (Jakarta, UTC+7 by
//! default), so month boundaries are local ones, not UTC.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use reportsql_period::{PeriodSpec, Resolver};
//!
//! let resolver = Resolver::default();
//! let now = Utc.with_ymd_and_hms(2024, 4, 15, 3, 30, 0).unwrap();
//!
//! let range = resolver.resolve(&PeriodSpec::back_month(3), now).unwrap();
//! assert_eq!(range.start.to_rfc3339(), "2024-01-01T00:00:00+07:00");
//! assert_eq!(range.end.to_rfc3339(), "2024-01-31T23:59:59+07:00");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod kind;
pub mod resolve;
pub mod spec;

pub use error::PeriodError;
pub use kind::PeriodKind;
pub use resolve::{reporting_zone, ResolvedRange, Resolver, REPORTING_UTC_OFFSET_SECS};
pub use spec::{MonthYear, PeriodParams, PeriodSpec};
