//! Parameterized SQL assembly for report-style analytical queries.
//!
//! This crate composes SELECT fields, FROM clauses, and WHERE conditions
//! (including nested AND/OR groups and calendar date-range predicates) into a
//! single SQL string plus a positional argument list, using PostgreSQL-style
//! numbered placeholders (`$1`, `$2`, ...).
//!
//! The central contract is the [`Condition`] capability: every condition-like
//! component renders itself with `build(param_offset)`, returning a
//! [`SqlFragment`] whose placeholders are numbered relative to the caller's
//! offset. Groups thread the offset through their members by the exact count
//! of arguments consumed so far, so variable-arity conditions (`IN` lists,
//! `IS NULL`) always interleave correctly.
//!
//! # Example
//!
//! ```
//! use reportsql_query::{
//!     ComparisonOperator, FieldCondition, LogicalOperator, PostgresQueryBuilder,
//! };
//!
//! let (sql, args) = PostgresQueryBuilder::new()
//!     .select(["id", "amount"])
//!     .from("transactions")
//!     .filter(FieldCondition::new("status", ComparisonOperator::Equals, "posted"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT id, amount FROM transactions WHERE status = $1");
//! assert_eq!(args.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod condition;
pub mod daterange;
pub mod error;
pub mod group;
pub mod select;
pub mod value;

pub use builder::{FromClause, PostgresQueryBuilder};
pub use condition::{ComparisonOperator, Condition, FieldCondition, FieldValue};
pub use daterange::DateRangeCondition;
pub use error::BuildError;
pub use group::{LogicalOperator, WhereClause, WhereGroup};
pub use select::{AggregateFunction, AggregateSelect, SelectClause, SimpleSelect};
pub use value::{SqlFragment, SqlValue};
